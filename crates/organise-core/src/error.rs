//! Error Types
//!
//! Errors shared by all widget stores.

use thiserror::Error;

/// Common result type for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Widget-level errors
///
/// Only input validation surfaces to the user. Unknown ids are silent no-ops
/// and never produce `NotFound` from a mutation; the variant exists for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    /// Message suitable for a blocking alert
    pub fn user_message(&self) -> &str {
        match self {
            Error::NotFound(msg)
            | Error::InvalidInput(msg)
            | Error::Conflict(msg)
            | Error::Storage(msg)
            | Error::Serialization(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_kind() {
        let err = Error::InvalidInput("Le titre est obligatoire".to_string());
        assert_eq!(err.to_string(), "Invalid input: Le titre est obligatoire");
        assert_eq!(err.user_message(), "Le titre est obligatoire");
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(Error::from(parse_err), Error::Serialization(_)));
    }
}

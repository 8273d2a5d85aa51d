//! Name History
//!
//! Most-recent-first list of previously entered names, used for autocomplete.

use serde::{Deserialize, Serialize};

use crate::config::{HISTORY_CAPACITY, SUGGESTION_LIMIT, SUGGESTION_MIN_CHARS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameHistory {
    names: Vec<String>,
}

impl NameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted names, enforcing dedup and capacity
    pub fn from_names(names: Vec<String>) -> Self {
        let mut history = Self::new();
        for name in names {
            if !history.contains(&name) && history.names.len() < HISTORY_CAPACITY {
                history.names.push(name);
            }
        }
        history
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.names.iter().any(|n| n.to_lowercase() == lower)
    }

    /// Put a new name in front. Returns false if it was already known.
    pub fn remember(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.contains(name) {
            return false;
        }
        self.names.insert(0, name.to_string());
        self.names.truncate(HISTORY_CAPACITY);
        true
    }

    /// Case-insensitive substring matches, most recent first
    pub fn suggestions(&self, input: &str) -> Vec<&str> {
        if input.chars().count() < SUGGESTION_MIN_CHARS {
            return Vec::new();
        }
        let lower = input.to_lowercase();
        self.names
            .iter()
            .filter(|n| n.to_lowercase().contains(&lower))
            .take(SUGGESTION_LIMIT)
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first_and_dedup() {
        let mut history = NameHistory::new();
        assert!(history.remember("pain"));
        assert!(history.remember("lait"));
        assert!(!history.remember("PAIN"));
        assert_eq!(history.names(), &["lait".to_string(), "pain".to_string()]);
    }

    #[test]
    fn test_capacity() {
        let mut history = NameHistory::new();
        for i in 0..(HISTORY_CAPACITY + 10) {
            history.remember(&format!("article {}", i));
        }
        assert_eq!(history.names().len(), HISTORY_CAPACITY);
        assert_eq!(history.names()[0], format!("article {}", HISTORY_CAPACITY + 9));
    }

    #[test]
    fn test_suggestions() {
        let mut history = NameHistory::new();
        for name in ["tomates", "pommes", "tomme de savoie", "Thon"] {
            history.remember(name);
        }
        assert!(history.suggestions("t").is_empty());
        assert_eq!(history.suggestions("TOM"), vec!["tomme de savoie", "tomates"]);
        assert_eq!(history.suggestions("on"), vec!["Thon"]);
    }

    #[test]
    fn test_suggestion_limit() {
        let mut history = NameHistory::new();
        for i in 0..8 {
            history.remember(&format!("jus {}", i));
        }
        assert_eq!(history.suggestions("jus").len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn test_from_names_enforces_invariants() {
        let history = NameHistory::from_names(vec!["a".into(), "A".into(), "b".into()]);
        assert_eq!(history.names().len(), 2);
    }
}

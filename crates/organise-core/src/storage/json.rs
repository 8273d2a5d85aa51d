//! JSON snapshot helpers
//!
//! Every list is stored as one JSON document. Reads never fail: missing or
//! malformed data yields `None` and a warning, and the caller starts empty.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStorage;

/// Load and decode a JSON document
pub fn load_json<T: DeserializeOwned, S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Option<T> {
    let raw = load_raw(storage, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[storage] Malformed data under '{}', starting empty: {}", key, e);
            None
        }
    }
}

/// Read a raw value, logging storage failures
pub fn load_raw<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Option<String> {
    match storage.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::error!("[storage] Failed to read '{}': {}", key, e);
            None
        }
    }
}

/// Encode and write a full snapshot
///
/// Failures are logged; the in-memory state stays authoritative.
pub fn save_json<T: Serialize + ?Sized, S: KeyValueStorage + ?Sized>(storage: &S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => save_raw(storage, key, &json),
        Err(e) => log::error!("[storage] Failed to encode '{}': {}", key, e),
    }
}

pub fn save_raw<S: KeyValueStorage + ?Sized>(storage: &S, key: &str, value: &str) {
    if let Err(e) = storage.set_item(key, value) {
        log::error!("[storage] Failed to write '{}': {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        save_json(&storage, "k", &vec![1, 2, 3]);
        let loaded: Option<Vec<u32>> = load_json(&storage, "k");
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_malformed_yields_none() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "{not json").unwrap();
        let loaded: Option<Vec<u32>> = load_json(&storage, "k");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_missing_yields_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<u32>> = load_json(&storage, "absent");
        assert!(loaded.is_none());
    }
}

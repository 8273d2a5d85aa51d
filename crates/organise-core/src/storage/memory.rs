//! In-memory storage
//!
//! Clones share the same map, so a test can drop a store and reload it
//! from the same "browser".

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::traits::KeyValueStorage;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| Error::Storage(format!("memory storage poisoned: {}", e)))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("a", "1").unwrap();
        assert_eq!(other.get_item("a").unwrap(), Some("1".to_string()));

        other.remove_item("a").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_absent_key() {
        let storage = MemoryStorage::new();
        assert!(storage.remove_item("missing").is_ok());
    }
}

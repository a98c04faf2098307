//! In-memory key-value store.
//!
//! Useful for testing. Data is not persisted across restarts.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::adapter::KeyValueStore;
use crate::error::{StorageError, StorageResult};

/// In-memory key-value store.
///
/// Thread-safe through an `RwLock` around the map.
///
/// # Example
///
/// ```rust
/// use kira_storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// assert_eq!(store.backend_name(), "memory");
/// assert!(store.is_empty().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.entries.read().map_err(StorageError::lock)?.len())
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Removes every entry.
    pub fn clear(&self) -> StorageResult<()> {
        self.entries.write().map_err(StorageError::lock)?.clear();
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self
            .entries
            .read()
            .map_err(StorageError::lock)?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .map_err(StorageError::lock)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self
            .entries
            .write()
            .map_err(StorageError::lock)?
            .remove(key)
            .is_some())
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let entries = self.entries.read().map_err(StorageError::lock)?;
        let mut keys: Vec<String> = entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let mut map = self.entries.write().map_err(StorageError::lock)?;
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }
}

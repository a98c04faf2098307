//! Key-value store trait definition.
//!
//! Every backend stores string values under string keys. Calculators never
//! touch a store; the presentation layer injects one to remember the last
//! values a user typed.

use crate::error::StorageResult;

/// String key-value store.
///
/// The batch methods have default implementations built on the single-key
/// methods; backends with transactions override them to apply a batch
/// atomically.
///
/// # Example
///
/// ```rust
/// use kira_storage::{InMemoryStore, KeyValueStore};
///
/// let store = InMemoryStore::new();
/// store.set("loan.loanAmount", "100,000").unwrap();
/// assert_eq!(store.get("loan.loanAmount").unwrap().as_deref(), Some("100,000"));
/// assert!(store.remove("loan.loanAmount").unwrap());
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Returns true if it was present.
    fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Lists the keys starting with `prefix`, in ascending order.
    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Reads several keys; the result is aligned with `keys`.
    fn get_many(&self, keys: &[&str]) -> StorageResult<Vec<Option<String>>> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    /// Stores several entries.
    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Removes several keys. Returns how many were present.
    fn remove_many(&self, keys: &[&str]) -> StorageResult<usize> {
        let mut removed = 0;
        for key in keys {
            if self.remove(key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

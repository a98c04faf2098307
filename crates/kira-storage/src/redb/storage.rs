//! RedbStore implementation.
//!
//! Implements the KeyValueStore trait using redb as the underlying database.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};

use crate::adapter::KeyValueStore;
use crate::error::StorageResult;

// Table definitions
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Redb-based key-value store.
///
/// All entries live in a single `kv` table. Batch writes and removals run in
/// one write transaction.
///
/// # Example
///
/// ```rust,ignore
/// use kira_storage::{KeyValueStore, RedbStore};
///
/// let store = RedbStore::open("./inputs.redb")?;
/// store.set("fuel.distance", "450")?;
/// ```
pub struct RedbStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl RedbStore {
    /// Opens or creates a database at the given path.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database cannot be created, or if
    /// another process holds the database open.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(&path)?;
        let store = Self {
            db: Arc::new(db),
            path,
        };
        store.initialize_tables()?;
        log::debug!("opened redb store at {}", store.path.display());
        Ok(store)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Initializes all required tables.
    fn initialize_tables(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").field("path", &self.path).finish()
    }
}

impl KeyValueStore for RedbStore {
    fn backend_name(&self) -> &'static str {
        "redb"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let value = table.get(key)?.map(|guard| guard.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        log::trace!("stored {}", key);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(KV_TABLE)?;
            let result = table.remove(key)?;
            result.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }

    fn keys_with_prefix(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        let mut keys = Vec::new();
        for entry in table.range(prefix..)? {
            let (key, _) = entry?;
            let key = key.value();
            if !key.starts_with(prefix) {
                break;
            }
            keys.push(key.to_string());
        }
        Ok(keys)
    }

    fn get_many(&self, keys: &[&str]) -> StorageResult<Vec<Option<String>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;

        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(table.get(*key)?.map(|value| value.value().to_string()));
        }
        Ok(values)
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(KV_TABLE)?;
            for (key, value) in entries {
                table.insert(*key, *value)?;
            }
        }
        write_txn.commit()?;
        log::trace!("stored {} entries", entries.len());
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> StorageResult<usize> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(KV_TABLE)?;
            let mut removed = 0;
            for key in keys {
                if table.remove(*key)?.is_some() {
                    removed += 1;
                }
            }
            removed
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn create_test_store() -> (TempDir, RedbStore) {
        let dir = tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_set_get_remove() {
        let (_dir, store) = create_test_store();

        assert_eq!(store.get("loan.loanAmount").unwrap(), None);
        store.set("loan.loanAmount", "100,000").unwrap();
        assert_eq!(store.get("loan.loanAmount").unwrap().as_deref(), Some("100,000"));

        assert!(store.remove("loan.loanAmount").unwrap());
        assert!(!store.remove("loan.loanAmount").unwrap());
        assert_eq!(store.get("loan.loanAmount").unwrap(), None);
    }

    #[test]
    fn test_keys_with_prefix_stops_at_prefix_end() {
        let (_dir, store) = create_test_store();
        store
            .set_many(&[
                ("fuel.distance", "450"),
                ("loan.loanTerm", "10"),
                ("loan.interestRate", "5"),
                ("loanx.other", "1"),
                ("roi.monthlyRental", "2000"),
            ])
            .unwrap();

        assert_eq!(
            store.keys_with_prefix("loan.").unwrap(),
            vec!["loan.interestRate", "loan.loanTerm"]
        );
        assert!(store.keys_with_prefix("property").unwrap().is_empty());
    }

    #[test]
    fn test_batch_operations() {
        let (_dir, store) = create_test_store();
        store.set_many(&[("a", "1"), ("b", "2"), ("c", "3")]).unwrap();

        assert_eq!(
            store.get_many(&["c", "x", "a"]).unwrap(),
            vec![Some("3".to_string()), None, Some("1".to_string())]
        );
        assert_eq!(store.remove_many(&["a", "b", "x"]).unwrap(), 2);
        assert_eq!(store.keys_with_prefix("").unwrap(), vec!["c"]);
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("kira").join("inputs.redb");
        let store = RedbStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.backend_name(), "redb");
    }
}

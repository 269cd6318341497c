//! # Storage Backend Contract
//!
//! The registry is in-memory; durability is an injected collaborator. The
//! contract is deliberately small — get/put/delete by record key, payloads
//! as plain JSON values — so a deployment can back it with whatever it
//! already runs. The core defines no file or database schema beyond the
//! serde representation of its records.
//!
//! Two implementations ship here: [`MemoryStore`] for tests and ephemeral
//! sessions, and [`JsonFileStore`], a whole-file JSON store that backs the
//! CLI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use tfa_core::AuthorityError;

/// Durable storage contract for a persistence collaborator.
///
/// Keys are the stringified record identifiers (`boat:<uuid>` and friends).
/// The registry mirrors every committed mutation through the backend;
/// reads are always served from memory.
pub trait StorageBackend {
    /// Fetch a record by key, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<Value>, AuthorityError>;

    /// Store or replace a record.
    fn put(&mut self, key: &str, record: &Value) -> Result<(), AuthorityError>;

    /// Remove a record. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), AuthorityError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, AuthorityError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, record: &Value) -> Result<(), AuthorityError> {
        self.records.insert(key.to_string(), record.clone());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), AuthorityError> {
        self.records.remove(key);
        Ok(())
    }
}

/// Whole-file JSON backend.
///
/// Holds the record map in memory and rewrites the file on every mutation.
/// Fine for the single-operator CLI this ships with; a real deployment
/// injects something with finer-grained writes.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing records if the file exists.
    pub fn open(path: &Path) -> Result<Self, AuthorityError> {
        let records = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// All records currently held, for registry rehydration at startup.
    ///
    /// Deliberately not part of [`StorageBackend`] — the runtime contract
    /// is by-key only; enumeration is a bootstrap concern.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.records.iter()
    }

    fn flush(&self) -> Result<(), AuthorityError> {
        let raw = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StorageBackend for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, AuthorityError> {
        Ok(self.records.get(key).cloned())
    }

    fn put(&mut self, key: &str, record: &Value) -> Result<(), AuthorityError> {
        self.records.insert(key.to_string(), record.clone());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), AuthorityError> {
        if self.records.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.put("boat:1", &json!({"name": "Sea Wanderer"})).unwrap();
        let record = store.get("boat:1").unwrap().unwrap();
        assert_eq!(record["name"], "Sea Wanderer");
        store.delete("boat:1").unwrap();
        assert!(store.get("boat:1").unwrap().is_none());
    }

    #[test]
    fn test_memory_store_delete_absent_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.delete("boat:missing").is_ok());
    }

    #[test]
    fn test_json_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("permit:1", &json!({"season": "Fall 2024"})).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        let record = reopened.get("permit:1").unwrap().unwrap();
        assert_eq!(record["season"], "Fall 2024");
        assert_eq!(reopened.entries().count(), 1);
    }

    #[test]
    fn test_json_file_store_delete_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("boat:1", &json!({})).unwrap();
        store.delete("boat:1").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("boat:1").unwrap().is_none());
    }

    #[test]
    fn test_json_file_store_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(&dir.path().join("absent.json")).unwrap();
        assert_eq!(store.entries().count(), 0);
    }
}

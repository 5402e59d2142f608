//! In-memory key-value store for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{KeyValueStore, StorageError};

/// In-memory [`KeyValueStore`] with failure injection.
///
/// Clones share the same backing map, so a test can keep one handle for
/// inspection while the code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    read_should_fail: Arc<Mutex<bool>>,
    write_should_fail: Arc<Mutex<bool>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `pairs`.
    pub fn with_values(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in pairs {
            store.insert(key, value);
        }
        store
    }

    /// Set a value directly, bypassing failure injection.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Read a value directly, bypassing failure injection.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Configure whether `get` should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether `set` should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.read_should_fail.lock().unwrap() {
            return Err(StorageError::ReadFailed("Mock read failure".to_string()));
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(StorageError::WriteFailed("Mock write failure".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("rewriteCount"), Ok(None));
        store.set("rewriteCount", "2").unwrap();
        assert_eq!(store.get("rewriteCount"), Ok(Some("2".to_string())));
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::with_values(&[("isMember", "true")]);
        let clone = store.clone();
        clone.set("rewriteCount", "5").unwrap();
        assert_eq!(store.value("rewriteCount"), Some("5".to_string()));
        assert_eq!(clone.value("isMember"), Some("true".to_string()));
    }

    #[test]
    fn test_failure_injection() {
        let store = InMemoryStore::new();
        store.set_read_should_fail(true);
        store.set_write_should_fail(true);
        assert!(matches!(store.get("k"), Err(StorageError::ReadFailed(_))));
        assert!(matches!(store.set("k", "v"), Err(StorageError::WriteFailed(_))));
        assert_eq!(store.value("k"), None);
    }
}

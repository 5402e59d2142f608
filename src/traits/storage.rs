//! Key-value persistence trait abstraction.
//!
//! Quota and membership state survive restarts through this trait. Values are
//! plain strings under fixed keys, so the backing store needs no schema.

use thiserror::Error;

/// Key-value persistence errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Failed to read state: {0}")]
    ReadFailed(String),

    #[error("Failed to write state: {0}")]
    WriteFailed(String),

    #[error("State file is corrupt: {0}")]
    Corrupt(String),
}

/// String-keyed persistence.
///
/// Implementations include [`crate::adapters::FileKeyValueStore`] for real
/// use and [`crate::adapters::mock::InMemoryStore`] for tests.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

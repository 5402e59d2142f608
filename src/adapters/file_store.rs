//! File-backed key-value store.
//!
//! All keys live in one JSON object, `~/.serp-studio/state.json` by default:
//!
//! ```json
//! { "isMember": "false", "rewriteCount": "3" }
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::{KeyValueStore, StorageError};

/// File name of the state file inside the state directory.
pub const STATE_FILE: &str = "state.json";

/// [`KeyValueStore`] persisted as a JSON object on disk.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    state_path: PathBuf,
}

impl FileKeyValueStore {
    /// Store using `state.json` inside `state_dir`.
    pub fn in_dir(state_dir: &Path) -> Self {
        Self {
            state_path: state_dir.join(STATE_FILE),
        }
    }

    /// Store using an explicit file path.
    pub fn at_path(state_path: PathBuf) -> Self {
        Self { state_path }
    }

    /// Get the path to the state file.
    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.state_path.exists() {
            return Ok(BTreeMap::new());
        }

        let file = File::open(&self.state_path)
            .map_err(|e| StorageError::ReadFailed(format!("{:?}: {}", self.state_path, e)))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| StorageError::Corrupt(format!("{:?}: {}", self.state_path, e)))
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.state_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StorageError::WriteFailed(format!("{:?}: {}", parent, e)))?;
            }
        }

        let write_err = |e: std::io::Error| {
            StorageError::WriteFailed(format!("{:?}: {}", self.state_path, e))
        };
        let file = File::create(&self.state_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, values)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        writer.flush().map_err(write_err)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StorageError::Corrupt(detail)) => {
                tracing::warn!("Replacing corrupt state file: {}", detail);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}

//! Download sink writing into a directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::traits::{CaptureError, DownloadSink};

/// Saves exported files into a downloads directory, overwriting any previous
/// file of the same name.
#[derive(Debug, Clone)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectoryDownloads {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(CaptureError::SaveFailed(format!(
                "invalid file name '{}'",
                file_name
            )));
        }

        fs::create_dir_all(&self.dir)
            .map_err(|e| CaptureError::SaveFailed(format!("{:?}: {}", self.dir, e)))?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|e| CaptureError::SaveFailed(format!("{:?}: {}", path, e)))?;
        Ok(path)
    }
}

//! Mock capture and download sinks for testing.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::export::SnippetRegion;
use crate::traits::{CaptureError, CapturedImage, DownloadSink, RegionCapture};

/// [`RegionCapture`] returning a fixed image, or a configured error.
#[derive(Debug, Clone, Default)]
pub struct MockCapture {
    failure: Arc<Mutex<Option<CaptureError>>>,
    captured: Arc<Mutex<Vec<SnippetRegion>>>,
}

impl MockCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following capture fail with `error` (or succeed on `None`).
    pub fn set_failure(&self, error: Option<CaptureError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Regions passed to `capture`, in order.
    pub fn captured_regions(&self) -> Vec<SnippetRegion> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegionCapture for MockCapture {
    async fn capture(&self, region: &SnippetRegion) -> Result<CapturedImage, CaptureError> {
        self.captured.lock().unwrap().push(region.clone());
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(CapturedImage {
            png: b"\x89PNG mock".to_vec(),
            width: 2,
            height: 1,
        })
    }
}

/// [`DownloadSink`] that keeps delivered files in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingDownloads {
    delivered: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// `(file_name, bytes)` pairs delivered so far.
    pub fn delivered(&self) -> Vec<(String, Vec<u8>)> {
        self.delivered.lock().unwrap().clone()
    }
}

impl DownloadSink for RecordingDownloads {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError> {
        if *self.should_fail.lock().unwrap() {
            return Err(CaptureError::SaveFailed("Mock save failure".to_string()));
        }
        self.delivered
            .lock()
            .unwrap()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from("/downloads").join(file_name))
    }
}

//! Image capture and download trait abstractions.
//!
//! Export turns the rendered snippet card into a PNG ([`RegionCapture`]) and
//! hands the bytes to the user ([`DownloadSink`]).

use std::path::PathBuf;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::export::SnippetRegion;

/// Errors raised while capturing or saving an image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("Failed to encode image: {0}")]
    EncodeFailed(String),

    #[error("Failed to save image: {0}")]
    SaveFailed(String),
}

/// A PNG produced by a [`RegionCapture`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedImage {
    /// PNG-encoded bytes
    pub png: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CapturedImage {
    /// `data:` URL for the image, as a browser capture would return.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }

    /// First 8 hex chars of the sha256 of the PNG bytes.
    pub fn short_hash(&self) -> String {
        let digest = Sha256::digest(&self.png);
        hex::encode(&digest[..4])
    }

    /// Size of the encoded PNG in bytes.
    pub fn byte_size(&self) -> usize {
        self.png.len()
    }
}

/// Serializes a visual region into an image.
#[async_trait]
pub trait RegionCapture: Send + Sync {
    async fn capture(&self, region: &SnippetRegion) -> Result<CapturedImage, CaptureError>;
}

/// Delivers exported bytes to the user, e.g. as a downloaded file.
pub trait DownloadSink: Send + Sync {
    /// Save `bytes` as `file_name`; returns where they ended up.
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError>;
}

//! One-shot export of the snippet card to a PNG download.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::metrics::DisplayMode;
use crate::traits::{CaptureError, CapturedImage, DownloadSink, RegionCapture};

/// File name used for every export.
pub const EXPORT_FILE_NAME: &str = "serp-preview.png";

/// Card color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The visual region to capture: exactly what the preview card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnippetRegion {
    pub title: String,
    pub url: String,
    pub description: String,
    pub mode: DisplayMode,
    pub theme: Theme,
}

/// Result of one export attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// The image was captured and delivered.
    Exported {
        path: PathBuf,
        image: CapturedImage,
    },
    /// Capture or delivery failed; nothing was written.
    Failed(CaptureError),
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Exported { .. })
    }
}

/// Drives the capture collaborator and hands the PNG to the download sink.
///
/// Cheap to clone; a clone can be moved into a spawned task.
#[derive(Clone)]
pub struct ExportCoordinator {
    capture: Arc<dyn RegionCapture>,
    downloads: Arc<dyn DownloadSink>,
}

impl ExportCoordinator {
    pub fn new(capture: Arc<dyn RegionCapture>, downloads: Arc<dyn DownloadSink>) -> Self {
        Self { capture, downloads }
    }

    /// Capture `region` and deliver it as [`EXPORT_FILE_NAME`].
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`ExportOutcome::Failed`]. There is no retry.
    pub async fn export(&self, region: &SnippetRegion) -> ExportOutcome {
        let image = match self.capture.capture(region).await {
            Ok(image) => image,
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                return ExportOutcome::Failed(e);
            }
        };

        match self.downloads.deliver(EXPORT_FILE_NAME, &image.png) {
            Ok(path) => {
                tracing::info!(
                    path = %path.display(),
                    bytes = image.byte_size(),
                    hash = %image.short_hash(),
                    "Snippet exported"
                );
                ExportOutcome::Exported { path, image }
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                ExportOutcome::Failed(e)
            }
        }
    }
}

impl std::fmt::Debug for ExportCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportCoordinator").finish_non_exhaustive()
    }
}

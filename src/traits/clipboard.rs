//! Clipboard trait abstraction.

use thiserror::Error;

/// Clipboard access errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Write-only access to a text clipboard.
pub trait TextClipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

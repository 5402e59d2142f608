//! System clipboard adapter using `arboard`.

use crate::traits::{ClipboardError, TextClipboard};

/// Writes to the OS clipboard (NSPasteboard on macOS, X11/Wayland on Linux).
///
/// A fresh `arboard::Clipboard` is opened per copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl TextClipboard for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

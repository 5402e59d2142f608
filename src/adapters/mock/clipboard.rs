//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardError, TextClipboard};

/// Remembers the last copied text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }
}

impl TextClipboard for MemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.should_fail.lock().unwrap() {
            return Err(ClipboardError::Unavailable("Mock clipboard failure".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

//! The user's editable snippet and the AI overlay.

use serde::Serialize;

use crate::metrics::DisplayMode;

pub const DEFAULT_TITLE: &str = "Your Awesome Title Goes Here";
pub const DEFAULT_DESCRIPTION: &str =
    "This is your meta description. Make sure it is concise and engaging.";
pub const DEFAULT_URL: &str = "example.com/page";

/// Title, description, URL and layout being edited.
///
/// Only changed field-by-field through the setters; a rewrite never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    pub mode: DisplayMode,
}

impl Default for SnippetDraft {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            url: DEFAULT_URL.to_string(),
            mode: DisplayMode::Desktop,
        }
    }
}

impl SnippetDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }
}

/// Text produced by a completed rewrite, overlaid on the draft for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RewriteResult {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Which editable text field an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetField {
    Title,
    Description,
    Url,
}

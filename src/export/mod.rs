//! Snippet export: capture, download, and transient success feedback.

pub mod coordinator;
pub mod feedback;

pub use coordinator::{ExportCoordinator, ExportOutcome, SnippetRegion, Theme, EXPORT_FILE_NAME};
pub use feedback::{Effect, ExportFeedback};

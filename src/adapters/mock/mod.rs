//! Mock implementations for testing.
//!
//! Test doubles for every collaborator trait, so the core can be exercised
//! without network, filesystem, clipboard or a rendering surface.
//!
//! - [`MockHttpClient`] - Canned responses, recorded requests
//! - [`InMemoryStore`] - Key-value store with failure injection
//! - [`FixedWidthMetrics`] - Constant width per character
//! - [`MockCapture`] / [`RecordingDownloads`] - Export collaborators
//! - [`MemoryClipboard`] - Clipboard that remembers the last copy

pub mod capture;
pub mod clipboard;
pub mod http;
pub mod metrics;
pub mod store;

pub use capture::{MockCapture, RecordingDownloads};
pub use clipboard::MemoryClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use metrics::FixedWidthMetrics;
pub use store::InMemoryStore;

//! Trait abstractions for the studio's external collaborators.
//!
//! Each collaborator the core depends on is reached through a trait so that
//! production adapters and test doubles are interchangeable.
//!
//! # Traits
//!
//! - [`HttpClient`] - POST requests to the rewrite backend or upstream API
//! - [`KeyValueStore`] - Persistence for quota and membership
//! - [`MeasurementContext`] - Rendered text width
//! - [`RegionCapture`] - Snippet card to PNG
//! - [`DownloadSink`] - Hands exported bytes to the user
//! - [`TextClipboard`] - Copy text to the clipboard

pub mod capture;
pub mod clipboard;
pub mod http;
pub mod measure;
pub mod storage;

pub use capture::{CaptureError, CapturedImage, DownloadSink, RegionCapture};
pub use clipboard::{ClipboardError, TextClipboard};
pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use measure::{FontSpec, MeasurementContext, MeasurementError};
pub use storage::{KeyValueStore, StorageError};

//! Concrete implementations of the collaborator traits.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileKeyValueStore`] - JSON state file
//! - [`ArialMetrics`] - Arial width table measurement
//! - [`RasterCapture`] - PNG rendering with the `image` crate
//! - [`DirectoryDownloads`] - Saves exports into a directory
//! - [`SystemClipboard`] - OS clipboard via `arboard`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all of the above.

pub mod directory_downloads;
pub mod file_store;
pub mod glyph_metrics;
pub mod mock;
pub mod raster_capture;
pub mod reqwest_http;
pub mod system_clipboard;

pub use directory_downloads::DirectoryDownloads;
pub use file_store::FileKeyValueStore;
pub use glyph_metrics::ArialMetrics;
pub use raster_capture::RasterCapture;
pub use reqwest_http::ReqwestHttpClient;
pub use system_clipboard::SystemClipboard;

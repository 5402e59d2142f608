//! Unified error handling for the studio.
//!
//! - **Error categories**: high-level classification for handling decisions
//! - **Unified error type**: [`StudioError`] consolidates collaborator errors
//! - **Result alias**: [`StudioResult<T>`] for consistent return types
//!
//! | Category | Example | Retryable |
//! |----------|---------|-----------|
//! | Network | Rewrite backend unreachable | Yes |
//! | Server | Backend returned 5xx | Yes |
//! | User | Free quota exhausted | No |
//! | System | Export or clipboard failure | Yes |
//! | Configuration | Bad environment variable | No |

mod category;
mod studio_error;

pub use category::ErrorCategory;
pub use studio_error::StudioError;

/// Result type alias used throughout the crate.
pub type StudioResult<T> = Result<T, StudioError>;

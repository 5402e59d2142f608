//! Unified error type for the studio.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::{CaptureError, ClipboardError, HttpError, MeasurementError, StorageError};

/// Unified error type.
///
/// Every failure the core can hit is handled where it originates and reaches
/// the presentation layer as one of these values; none of them is fatal.
#[derive(Debug, Error)]
pub enum StudioError {
    /// Free rewrites are used up and the user is not a member.
    #[error("You've used your {limit} free rewrites. Please become a member to continue.")]
    QuotaExceeded { used: u32, limit: u32 },

    /// Only one rewrite may be in flight.
    #[error("A rewrite is already in progress")]
    RewriteInFlight,

    /// The rewrite backend answered with a non-success status.
    #[error("Rewrite backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    /// The rewrite backend could not be reached.
    #[error("Rewrite backend unreachable: {0}")]
    BackendUnreachable(#[from] HttpError),

    #[error(transparent)]
    MeasurementUnavailable(#[from] MeasurementError),

    #[error("Export failed: {0}")]
    ExportFailure(#[from] CaptureError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::QuotaExceeded { .. } | StudioError::RewriteInFlight => ErrorCategory::User,
            StudioError::Backend { .. } => ErrorCategory::Server,
            StudioError::BackendUnreachable(_) => ErrorCategory::Network,
            StudioError::MeasurementUnavailable(_)
            | StudioError::ExportFailure(_)
            | StudioError::Storage(_)
            | StudioError::Clipboard(_)
            | StudioError::Io(_) => ErrorCategory::System,
            StudioError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Check if retrying the same action can succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StudioError::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            StudioError::RewriteInFlight => "REWRITE_IN_FLIGHT",
            StudioError::Backend { .. } => "BACKEND_ERROR",
            StudioError::BackendUnreachable(_) => "BACKEND_UNREACHABLE",
            StudioError::MeasurementUnavailable(_) => "MEASUREMENT_UNAVAILABLE",
            StudioError::ExportFailure(_) => "EXPORT_FAILURE",
            StudioError::Storage(_) => "STORAGE_ERROR",
            StudioError::Clipboard(_) => "CLIPBOARD_ERROR",
            StudioError::Config(_) => "CONFIG_ERROR",
            StudioError::Io(_) => "IO_ERROR",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StudioError::QuotaExceeded { .. } => self.to_string(),
            StudioError::RewriteInFlight => "Still rewriting, please wait.".to_string(),
            StudioError::Backend { .. } | StudioError::BackendUnreachable(_) => {
                "AI rewrite failed. Please try again later.".to_string()
            }
            StudioError::MeasurementUnavailable(_) => {
                "Pixel widths are unavailable right now.".to_string()
            }
            StudioError::ExportFailure(_) => "Export failed. Please try again.".to_string(),
            StudioError::Clipboard(_) => "Copy failed".to_string(),
            StudioError::Storage(err) => format!("Could not save settings: {}", err),
            StudioError::Config(msg) => format!("Configuration problem: {}", msg),
            StudioError::Io(err) => format!("File error: {}", err),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_exceeded_message() {
        let err = StudioError::QuotaExceeded { used: 10, limit: 10 };
        assert_eq!(
            err.user_message(),
            "You've used your 10 free rewrites. Please become a member to continue."
        );
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_backend_errors_are_retryable() {
        let server = StudioError::Backend {
            status: 500,
            detail: "boom".to_string(),
        };
        let network: StudioError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(server.category(), ErrorCategory::Server);
        assert_eq!(network.category(), ErrorCategory::Network);
        assert!(server.is_retryable());
        assert!(network.is_retryable());
        assert_eq!(server.error_code(), "BACKEND_ERROR");
        assert_eq!(network.error_code(), "BACKEND_UNREACHABLE");
    }

    #[test]
    fn test_conversions() {
        let err: StudioError = MeasurementError::Unavailable("no canvas".to_string()).into();
        assert!(matches!(err, StudioError::MeasurementUnavailable(_)));

        let err: StudioError = CaptureError::EncodeFailed("png".to_string()).into();
        assert_eq!(err.error_code(), "EXPORT_FAILURE");

        let err: StudioError = ClipboardError::Unavailable("headless".to_string()).into();
        assert_eq!(err.user_message(), "Copy failed");

        let err: StudioError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_config_is_not_retryable() {
        let err = StudioError::Config("SERP_STUDIO_MODE=tablet".to_string());
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_retryable());
        assert!(err.user_message().contains("tablet"));
    }
}

//! Error category classification for unified error handling.
//!
//! Categories decide how the front-end presents an error and whether offering
//! a retry makes sense.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The backend could not be reached (connection, DNS, timeout).
    Network,

    /// The backend answered with an error.
    Server,

    /// User action required (quota exhausted, request already running).
    User,

    /// Local environment problems (filesystem, clipboard, rendering).
    System,

    /// Invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if the same action may succeed when tried again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Network | ErrorCategory::Server | ErrorCategory::System
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the rewrite service is running and try again.",
            ErrorCategory::Server => "The rewrite service reported an error. Try again later.",
            ErrorCategory::User => "Review the message above before trying again.",
            ErrorCategory::System => "Try again. If it keeps failing, check permissions.",
            ErrorCategory::Configuration => "Fix the configuration and restart.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Error types for the phone validation library.
//!
//! Malformed phone numbers are not errors: they come back as data inside a
//! [`ValidationResult`](crate::ValidationResult). The types here cover the
//! remaining failures, such as reading input files or an internal fault
//! in the validation pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations.
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Error type for everything that is not a plain "bad number".
#[derive(Debug, Error)]
pub enum PhoneError {
    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// A pipeline stage produced a state the next stage cannot accept
    #[error("Internal validation error in {stage}: {message}")]
    Internal { stage: &'static str, message: String },
}

impl PhoneError {
    /// Shorthand for an internal pipeline fault.
    pub fn internal(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            stage,
            message: message.into(),
        }
    }
}

impl From<io::Error> for PhoneError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

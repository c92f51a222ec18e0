//! Error types and handling infrastructure for navtoggle.
//!
//! Library code returns [`NavToggleError`] through the crate-wide [`Result`] alias.
//! The binary wraps these in `anyhow` at the top level.

use thiserror::Error;

/// The main error type for navtoggle operations.
#[derive(Error, Debug)]
pub enum NavToggleError {
    /// A region id could not be resolved in the render tree
    #[error("Region not found in page: {id}")]
    MissingRegion { id: String },

    /// A trigger id could not be resolved in the render tree
    #[error("Trigger not found in page: {id}")]
    MissingTrigger { id: String },

    /// File system related errors (config or region body files)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for navtoggle operations.
pub type Result<T> = std::result::Result<T, NavToggleError>;

impl NavToggleError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    pub fn missing_region(id: impl Into<String>) -> Self {
        Self::MissingRegion { id: id.into() }
    }

    pub fn missing_trigger(id: impl Into<String>) -> Self {
        Self::MissingTrigger { id: id.into() }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for NavToggleError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for ktop
#[derive(Debug, Error)]
pub enum KtopError {
    /// Reading input or writing to the terminal failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Configuration parsing failed
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is invalid
    #[error("Invalid configuration file {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    /// The process source could not produce a snapshot
    #[error("Could not fetch processes: {message}")]
    Fetch { message: String },

    /// Malformed user input
    #[error("{message}")]
    Validation { message: String },

    /// The terminator could not signal the process
    #[error("Failed to kill process {pid}: {reason}")]
    Termination { pid: u32, reason: String },
}

impl KtopError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        KtopError::Config {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        KtopError::Fetch {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        KtopError::Validation {
            message: message.into(),
        }
    }

    /// Create a termination error
    pub fn termination(pid: u32, reason: impl Into<String>) -> Self {
        KtopError::Termination {
            pid,
            reason: reason.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: PathBuf) -> Self {
        KtopError::ConfigNotFound { path }
    }

    /// Create a config invalid error
    pub fn config_invalid(path: PathBuf, reason: impl Into<String>) -> Self {
        KtopError::ConfigInvalid {
            path,
            reason: reason.into(),
        }
    }

    /// Command-level failures that are reported to the user while the
    /// session keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            KtopError::Fetch { .. } | KtopError::Validation { .. } | KtopError::Termination { .. }
        )
    }
}

/// Result type alias for ktop operations
pub type Result<T> = std::result::Result<T, KtopError>;

impl From<toml::de::Error> for KtopError {
    fn from(err: toml::de::Error) -> Self {
        KtopError::Config {
            message: err.to_string(),
        }
    }
}

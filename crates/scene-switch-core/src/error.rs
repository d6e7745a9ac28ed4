//! Error types for the scene switching tool.
//!
//! Every error is recoverable at the boundary of the operation that raised it;
//! none of them should take down the host process.

use crate::shortcut::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the scene switching tool.
#[derive(Debug, Error)]
pub enum SceneSwitchError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Shortcut list errors
    #[error("Shortcut configuration is invalid:\n{0}")]
    Validation(ValidationReport),

    #[error("Shortcut index {index} is out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for scene switching operations.
pub type Result<T> = std::result::Result<T, SceneSwitchError>;

impl From<std::io::Error> for SceneSwitchError {
    fn from(err: std::io::Error) -> Self {
        SceneSwitchError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for SceneSwitchError {
    fn from(err: serde_json::Error) -> Self {
        SceneSwitchError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<ValidationReport> for SceneSwitchError {
    fn from(report: ValidationReport) -> Self {
        SceneSwitchError::Validation(report)
    }
}

impl SceneSwitchError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SceneSwitchError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// The validation report, if this error blocked a save.
    pub fn validation_report(&self) -> Option<&ValidationReport> {
        match self {
            SceneSwitchError::Validation(report) => Some(report),
            _ => None,
        }
    }
}

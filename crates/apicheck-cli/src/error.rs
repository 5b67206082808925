//! Error types and handling for the CLI
//!
//! Every variant is fatal to the run. Missing expectations are not errors and
//! never reach this module.

use crate::output::{status_line, StatusLevel};
use apicheck_schemas::LoaderError;
use std::io;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be loaded (missing file, unreadable, malformed)
    #[error("{0}")]
    Load(LoaderError),

    /// Failure after loading that no other variant anticipates
    #[error("Validation error: {message}")]
    Unexpected { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while writing output
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<LoaderError> for Error {
    fn from(error: LoaderError) -> Self {
        match error {
            // Parsed fine but could not be represented: not a format problem
            LoaderError::Conversion { .. } => Self::unexpected(error.to_string()),
            other => Self::Load(other),
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an unexpected error with message
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Load(_) | Self::Unexpected { .. } | Self::Io(_) | Self::Json(_) | Self::Yaml(_) => 1,
        }
    }
}

/// Format an error as the single `ERROR:` line shown to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    status_line(StatusLevel::Error, &error.to_string(), use_color)
}

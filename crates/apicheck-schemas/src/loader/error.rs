//! Error types for document loading operations
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::parser::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Failures that end a run before any check is made
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Nothing exists at the requested location
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// File exists but could not be read as text
    #[error("Failed to read file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Content is not well-formed for its format
    #[error("{format} parse error in '{}': {message}", path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    /// Content parsed but has no document tree representation
    #[error("Failed to convert '{}' into a document tree: {message}", path.display())]
    Conversion { path: PathBuf, message: String },
}

impl LoaderError {
    /// Create a not-found error
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::Io {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::Parse {
            path,
            format: Format::Yaml,
            message: error.to_string(),
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::Parse {
            path,
            format: Format::Json,
            message: error.to_string(),
        }
    }

    /// Create a tree conversion error
    pub fn conversion_error(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Conversion {
            path,
            message: message.into(),
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Conversion { path, .. } => path,
        }
    }

    /// Whether the run failed because there was nothing to validate
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the content itself was rejected by the parser
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

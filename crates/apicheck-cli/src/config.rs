//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - A configuration file named with `--config` (YAML/JSON/TOML)
//!
//! No file is read unless one is named, so a bare run always uses the
//! defaults. Command-line arguments take precedence over anything loaded here.

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Document validated when neither the command line nor a config file names one
pub const DEFAULT_DOCUMENT_PATH: &str = "docs/openapi.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document to validate
    pub document: Option<PathBuf>,

    /// Output settings
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format when `--output` is not given
    pub format: Option<OutputFormat>,

    /// Use colored output when writing to a terminal
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Config file syntaxes, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSyntax {
    Yaml,
    Toml,
    Json,
}

impl ConfigSyntax {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_str_with_syntax(&content, ConfigSyntax::from_path(path))
            .map_err(|reason| Error::config(format!("Failed to parse {}: {}", path.display(), reason)))
    }

    fn from_str_with_syntax(content: &str, syntax: ConfigSyntax) -> std::result::Result<Self, String> {
        match syntax {
            ConfigSyntax::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigSyntax::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigSyntax::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// Load configuration from an explicitly named file, or use the defaults
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => {
                let config = Self::from_file(path)?;
                debug!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Document to validate when none is given on the command line
    pub fn document_path(&self) -> PathBuf {
        self.document
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.document_path(), PathBuf::from("docs/openapi.yaml"));
        assert_eq!(config.output.format, None);
        assert!(config.output.color);
    }

    #[test]
    fn test_yaml_config() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(".apicheck.yaml");
        fs::write(&path, "document: api/spec.yaml\noutput:\n  format: json-pretty\n")?;

        let config = Config::from_file(&path)?;
        assert_eq!(config.document_path(), PathBuf::from("api/spec.yaml"));
        assert_eq!(config.output.format, Some(OutputFormat::JsonPretty));
        assert!(config.output.color);
        Ok(())
    }

    #[test]
    fn test_toml_and_json_config() -> Result<()> {
        let dir = tempdir()?;

        let toml_path = dir.path().join("config.toml");
        fs::write(&toml_path, "document = \"openapi.json\"\n\n[output]\ncolor = false\n")?;
        let config = Config::from_file(&toml_path)?;
        assert_eq!(config.document, Some(PathBuf::from("openapi.json")));
        assert!(!config.output.color);

        let json_path = dir.path().join("config.json");
        fs::write(&json_path, r#"{"output": {"format": "yaml"}}"#)?;
        let config = Config::from_file(&json_path)?;
        assert_eq!(config.document, None);
        assert_eq!(config.output.format, Some(OutputFormat::Yaml));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "output: [unclosed").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.exit_code(), 2);

        let err = Config::load_with_file(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_no_file_means_defaults() -> Result<()> {
        assert_eq!(Config::load_with_file(None)?, Config::default());
        Ok(())
    }
}

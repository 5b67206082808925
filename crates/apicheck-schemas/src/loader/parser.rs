//! Document parsing functionality for YAML and JSON formats
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::loader::DocumentTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// YAML format (.yaml, .yml, anything unrecognized)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    ///
    /// Only `.json` selects the JSON parser. YAML accepts JSON as well, so
    /// every other path is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }

}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

/// Document parser with support for multiple formats
#[derive(Debug, Default)]
pub struct DocumentParser;

impl DocumentParser {
    /// Create a new document parser
    pub fn new() -> Self {
        Self
    }

    /// Parse document content with explicit format
    pub fn parse_content(
        &self,
        content: &str,
        format: Format,
        path: &Path,
    ) -> LoaderResult<DocumentTree> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    ///
    /// Merge keys (`<<: *anchor`) are resolved before conversion.
    pub fn parse_yaml(&self, content: &str, path: &Path) -> LoaderResult<DocumentTree> {
        // First parse as YAML Value to catch YAML-specific errors
        let mut yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;
        yaml_value
            .apply_merge()
            .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

        // Convert to JSON Value for consistent handling
        serde_json::to_value(yaml_value)
            .map_err(|e| LoaderError::conversion_error(path.to_path_buf(), e.to_string()))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> LoaderResult<DocumentTree> {
        serde_json::from_str(content)
            .map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("openapi.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("openapi.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("openapi.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("openapi.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("openapi")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("openapi.txt")), Format::Yaml);
    }

    #[test]
    fn test_yaml_parsing() -> LoaderResult<()> {
        let parser = DocumentParser::new();
        let content = r#"
openapi: 3.0.3
info:
  title: Blog API
paths:
  /health:
    get:
      responses:
        200:
          description: OK
"#;

        let tree = parser.parse_yaml(content, Path::new("openapi.yaml"))?;
        assert_eq!(tree["openapi"], "3.0.3");
        assert_eq!(tree["info"]["title"], "Blog API");
        // Integer response codes become string keys
        assert!(tree["paths"]["/health"]["get"]["responses"]["200"].is_object());

        Ok(())
    }

    #[test]
    fn test_yaml_merge_keys() -> LoaderResult<()> {
        let parser = DocumentParser::new();
        let content = r#"
x-common: &common
  /health:
    get: {}
paths:
  <<: *common
  /posts: {}
"#;

        let tree = parser.parse_yaml(content, Path::new("openapi.yaml"))?;
        let paths = tree["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/posts"));
        assert!(!paths.contains_key("<<"));

        Ok(())
    }

    #[test]
    fn test_invalid_merge_is_parse_error() {
        let parser = DocumentParser::new();
        let err = parser
            .parse_yaml("paths:\n  <<: not-a-mapping\n", Path::new("bad.yaml"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::Parse { format: Format::Yaml, .. }));
    }

    #[test]
    fn test_json_parsing() -> LoaderResult<()> {
        let parser = DocumentParser::new();
        let content = r#"{"openapi": "3.1.0", "paths": {"/posts": {}}}"#;

        let tree = parser.parse_content(content, Format::Json, Path::new("openapi.json"))?;
        assert_eq!(tree["openapi"], "3.1.0");
        assert!(tree["paths"]["/posts"].is_object());

        Ok(())
    }

    #[test]
    fn test_yaml_accepts_json_content() -> LoaderResult<()> {
        let parser = DocumentParser::new();
        let tree = parser.parse_yaml(r#"{"openapi": "3.0.0"}"#, Path::new("openapi.yaml"))?;
        assert_eq!(tree["openapi"], "3.0.0");
        Ok(())
    }

    #[test]
    fn test_empty_yaml_is_null() -> LoaderResult<()> {
        let parser = DocumentParser::new();
        let tree = parser.parse_yaml("", Path::new("empty.yaml"))?;
        assert!(tree.is_null());
        Ok(())
    }

    #[test]
    fn test_malformed_content() {
        let parser = DocumentParser::new();

        let err = parser
            .parse_yaml("paths: [unclosed", Path::new("bad.yaml"))
            .unwrap_err();
        assert!(err.is_parse_error());

        let err = parser
            .parse_json("{\"paths\": ", Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::Parse { format: Format::Json, .. }));
    }
}

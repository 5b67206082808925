//! Loader entry point: existence check, read, parse
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{DocumentParser, Format},
    DocumentTree,
};
use std::path::Path;
use tracing::debug;

/// Loads a single document from the filesystem
#[derive(Debug, Default)]
pub struct DocumentLoader {
    parser: DocumentParser,
}

impl DocumentLoader {
    /// Create a new document loader
    pub fn new() -> Self {
        Self {
            parser: DocumentParser::new(),
        }
    }

    /// Load and parse the document at `path`
    ///
    /// A missing file is reported as [`LoaderError::NotFound`] before any
    /// read is attempted.
    pub fn load(&self, path: &Path) -> LoaderResult<DocumentTree> {
        if !path.exists() {
            return Err(LoaderError::not_found(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;
        debug!(path = %path.display(), bytes = content.len(), "Document read");

        let format = Format::from_path(path);
        let tree = self.parser.parse_content(&content, format, path)?;
        debug!(path = %path.display(), %format, "Document parsed");

        Ok(tree)
    }
}

/// Load a document with a default [`DocumentLoader`]
pub fn load_document(path: &Path) -> LoaderResult<DocumentTree> {
    DocumentLoader::new().load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs").join("openapi.yaml");

        let err = load_document(&path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_load_yaml_file() -> LoaderResult<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, "openapi: 3.0.3\ninfo:\n  title: Blog API\n").unwrap();

        let tree = DocumentLoader::new().load(&path)?;
        assert_eq!(tree["info"]["title"], "Blog API");
        Ok(())
    }

    #[test]
    fn test_load_json_file() -> LoaderResult<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(&path, r#"{"openapi": "3.0.3", "tags": [{"name": "users"}]}"#).unwrap();

        let tree = load_document(&path)?;
        assert_eq!(tree["tags"][0]["name"], "users");
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, "info:\n  title: [broken\n").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.is_parse_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }
}

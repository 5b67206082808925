//! Document loading and parsing functionality
//!
//! This module turns a file on disk into a [`DocumentTree`]:
//! - Existence check ahead of any read, so a missing file is reported apart
//!   from malformed content
//! - YAML and JSON parsing support
//! - Conversion of YAML values into the shared tree representation
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use apicheck_schemas::loader::DocumentLoader;
//! use std::path::Path;
//!
//! let loader = DocumentLoader::new();
//! let document = loader.load(Path::new("docs/openapi.yaml"))?;
//! println!("Loaded document: {}", serde_json::to_string_pretty(&document)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

pub mod document_loader;
pub mod error;
pub mod parser;

pub use document_loader::{load_document, DocumentLoader};
pub use error::{LoaderError, LoaderResult};
pub use parser::{DocumentParser, Format};

/// Parsed representation of an API description document
///
/// A mapping with string keys, an ordered sequence, or a scalar.
pub type DocumentTree = serde_json::Value;

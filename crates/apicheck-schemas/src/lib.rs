//! Apicheck Schemas - document loading and structural presence checks
//!
//! This crate loads a single API description document (YAML or JSON) into a
//! generic document tree and checks it against a fixed set of expectations:
//! - **Paths**: required entries under `paths`
//! - **Schemas**: required names under `components.schemas`
//! - **Security**: the required scheme under `components.securitySchemes`
//!
//! Missing expectations are findings, not failures. The only fallible step is
//! loading the document.
//!
//! ## Quick Start
//!
//! ```rust
//! use apicheck_schemas::{validate_document, CheckStatus};
//! use serde_json::json;
//!
//! let document = json!({
//!     "openapi": "3.0.3",
//!     "info": {"title": "Blog API"},
//!     "paths": {"/health": {"get": {}}}
//! });
//!
//! let report = validate_document(&document);
//! assert_eq!(report.present_count(), 1);
//! assert!(report
//!     .checks
//!     .iter()
//!     .any(|c| c.identifier == "/health" && c.status == CheckStatus::Present));
//! ```
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{load_document, DocumentLoader, DocumentTree, Format, LoaderError, LoaderResult};
pub use validation::{
    validate_document, CheckCategory, CheckResult, CheckStatus, DocumentSummary, ExpectationSet,
    StructuralValidator, TreeLookup, ValidationReport,
};

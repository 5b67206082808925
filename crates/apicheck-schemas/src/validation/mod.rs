//! Structural validation for API description documents
//!
//! Validation here is a battery of presence checks: every expectation is a
//! key that must exist at a known place in the document tree. The outcome is
//! always a [`ValidationReport`]; a missing key is a finding inside the
//! report, never an error.
//!
//! - [`lookup`]: absence-tolerant traversal of the document tree
//! - [`expectations`]: the fixed, ordered expectation lists
//! - [`report`]: check results and the summary that travels with them
//! - [`structural`]: the validator that ties them together
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

pub mod expectations;
pub mod lookup;
pub mod report;
pub mod structural;

// Re-export commonly used types
pub use expectations::ExpectationSet;
pub use lookup::TreeLookup;
pub use report::{CheckCategory, CheckResult, CheckStatus, DocumentSummary, ValidationReport};
pub use structural::{StructuralValidator, DESCRIPTION_EXCERPT_CHARS, ELLIPSIS};

use crate::loader::DocumentTree;

/// Validate a document against [`ExpectationSet::DEFAULT`]
///
/// # Examples
///
/// ```rust
/// use apicheck_schemas::validation::{validate_document, CheckStatus};
/// use serde_json::json;
///
/// let report = validate_document(&json!({}));
/// assert_eq!(report.checks.len(), 15);
/// assert!(report.checks.iter().all(|c| c.status == CheckStatus::Missing));
/// ```
pub fn validate_document(document: &DocumentTree) -> ValidationReport {
    StructuralValidator::default().validate(document)
}

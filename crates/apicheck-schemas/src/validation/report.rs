//! Check results and the validation report
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// What part of the document a check concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    /// Top-level document metadata
    Metadata,
    /// An entry under `paths`
    Path,
    /// A named schema under `components.schemas`
    Schema,
    /// A scheme under `components.securitySchemes`
    Security,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckCategory::Metadata => "Metadata",
            CheckCategory::Path => "Path",
            CheckCategory::Schema => "Schema",
            CheckCategory::Security => "Security scheme",
        };
        f.write_str(label)
    }
}

/// Outcome of a single presence check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Present,
    Missing,
}

impl CheckStatus {
    pub fn from_presence(present: bool) -> Self {
        if present {
            CheckStatus::Present
        } else {
            CheckStatus::Missing
        }
    }

    pub fn is_present(self) -> bool {
        self == CheckStatus::Present
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Present => f.write_str("present"),
            CheckStatus::Missing => f.write_str("missing"),
        }
    }
}

/// One expectation and whether the document satisfied it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: CheckCategory,
    pub identifier: String,
    pub status: CheckStatus,
}

impl CheckResult {
    pub fn new(category: CheckCategory, identifier: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            category,
            identifier: identifier.into(),
            status,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.category, self.status, self.identifier)
    }
}

/// Descriptive metadata read from the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// `openapi` scalar, if any
    pub openapi_version: Option<Value>,
    /// `info.title` scalar, if any
    pub title: Option<Value>,
    /// `info.description`, cut to its leading characters and always
    /// terminated by an ellipsis
    pub description_excerpt: String,
    pub server_count: usize,
    pub tag_count: usize,
    pub path_count: usize,
    pub schema_count: usize,
}

impl DocumentSummary {
    /// Version rendered for display
    pub fn version_display(&self) -> String {
        display_scalar(self.openapi_version.as_ref())
    }

    /// Title rendered for display
    pub fn title_display(&self) -> String {
        display_scalar(self.title.as_ref())
    }
}

/// Render an optional scalar the way it reads in the document
///
/// Strings are shown without quotes; absent values read `None`.
pub fn display_scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Summary metadata plus the ordered check results of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub summary: DocumentSummary,
    pub checks: Vec<CheckResult>,
}

impl ValidationReport {
    /// Number of satisfied expectations
    pub fn present_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_present()).count()
    }

    /// Number of unsatisfied expectations
    pub fn missing_count(&self) -> usize {
        self.checks.len() - self.present_count()
    }

    /// Whether every expectation was satisfied
    pub fn is_complete(&self) -> bool {
        self.missing_count() == 0
    }

    /// Checks of a single category, in report order
    pub fn checks_in(&self, category: CheckCategory) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(move |c| c.category == category)
    }

    /// Unsatisfied expectations, in report order
    pub fn missing(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.status.is_present())
    }
}

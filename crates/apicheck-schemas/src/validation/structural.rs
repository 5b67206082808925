//! Presence-check validator
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use crate::loader::DocumentTree;
use crate::validation::expectations::{ExpectationSet, PATHS_SECTION, SCHEMAS_SECTION};
use crate::validation::lookup::TreeLookup;
use crate::validation::report::{CheckResult, CheckStatus, DocumentSummary, ValidationReport};
use tracing::debug;

/// Leading characters of `info.description` kept in the summary
pub const DESCRIPTION_EXCERPT_CHARS: usize = 50;

/// Appended to every description excerpt, truncated or not
pub const ELLIPSIS: &str = "...";

/// Runs an [`ExpectationSet`] against document trees
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator {
    expectations: ExpectationSet,
}

impl StructuralValidator {
    pub fn new(expectations: ExpectationSet) -> Self {
        Self { expectations }
    }

    /// Produce the summary and one check per expectation
    ///
    /// Never fails: absent sections yield empty summaries and missing checks.
    pub fn validate(&self, document: &DocumentTree) -> ValidationReport {
        let summary = summarize(document);

        let checks = self
            .expectations
            .iter()
            .map(|(category, section, identifier)| {
                let status = CheckStatus::from_presence(document.has_key_at(section, identifier));
                if !status.is_present() {
                    debug!(%category, identifier, "Expected key missing");
                }
                CheckResult::new(category, identifier, status)
            })
            .collect::<Vec<_>>();

        debug!(
            checks = checks.len(),
            missing = checks.iter().filter(|c| !c.status.is_present()).count(),
            "Structural validation finished"
        );

        ValidationReport { summary, checks }
    }
}

/// Read the descriptive metadata of a document
pub fn summarize(document: &DocumentTree) -> DocumentSummary {
    DocumentSummary {
        openapi_version: document.scalar_at(&["openapi"]).cloned(),
        title: document.scalar_at(&["info", "title"]).cloned(),
        description_excerpt: description_excerpt(document.string_at(&["info", "description"])),
        server_count: document.sequence_len_at(&["servers"]),
        tag_count: document.sequence_len_at(&["tags"]),
        path_count: document.mapping_len_at(PATHS_SECTION),
        schema_count: document.mapping_len_at(SCHEMAS_SECTION),
    }
}

/// First [`DESCRIPTION_EXCERPT_CHARS`] characters followed by [`ELLIPSIS`]
pub fn description_excerpt(description: &str) -> String {
    let mut excerpt: String = description.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    excerpt.push_str(ELLIPSIS);
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::report::CheckCategory;
    use serde_json::json;

    #[test]
    fn test_description_excerpt() {
        assert_eq!(description_excerpt(""), "...");
        assert_eq!(description_excerpt("Short"), "Short...");

        let long = "a".repeat(80);
        let excerpt = description_excerpt(&long);
        assert_eq!(excerpt, format!("{}...", "a".repeat(50)));

        // Counts characters, not bytes
        let wide = "数".repeat(60);
        let excerpt = description_excerpt(&wide);
        assert_eq!(excerpt.chars().count(), 53);
    }

    #[test]
    fn test_summary_defaults_for_empty_document() {
        let summary = summarize(&json!({}));
        assert_eq!(summary.openapi_version, None);
        assert_eq!(summary.title, None);
        assert_eq!(summary.description_excerpt, "...");
        assert_eq!(summary.server_count, 0);
        assert_eq!(summary.tag_count, 0);
        assert_eq!(summary.path_count, 0);
        assert_eq!(summary.schema_count, 0);
    }

    #[test]
    fn test_summary_counts() {
        let document = json!({
            "openapi": "3.0.3",
            "info": {"title": "Blog API", "description": "Users and posts"},
            "servers": [{"url": "https://api.example.com"}],
            "tags": [{"name": "users"}, {"name": "posts"}],
            "paths": {"/posts": {}, "/health": {}, "/extra": {}},
            "components": {"schemas": {"User": {}}}
        });

        let summary = summarize(&document);
        assert_eq!(summary.version_display(), "3.0.3");
        assert_eq!(summary.title_display(), "Blog API");
        assert_eq!(summary.description_excerpt, "Users and posts...");
        assert_eq!(summary.server_count, 1);
        assert_eq!(summary.tag_count, 2);
        assert_eq!(summary.path_count, 3);
        assert_eq!(summary.schema_count, 1);
    }

    #[test]
    fn test_non_string_description_is_empty() {
        let summary = summarize(&json!({"info": {"description": 42}}));
        assert_eq!(summary.description_excerpt, "...");
    }

    #[test]
    fn test_validate_orders_checks() {
        let report = StructuralValidator::default().validate(&json!({
            "components": {"securitySchemes": {"bearerAuth": {"type": "http"}}}
        }));

        let identifiers: Vec<&str> = report.checks.iter().map(|c| c.identifier.as_str()).collect();
        assert_eq!(
            identifiers,
            vec![
                "/users/register",
                "/users/login",
                "/users/me",
                "/posts",
                "/posts/{id}",
                "/health",
                "User",
                "CreateUserDto",
                "LoginDto",
                "AuthResponse",
                "Post",
                "CreatePostDto",
                "ApiResponse",
                "ApiError",
                "bearerAuth",
            ]
        );
        let security = report.checks.last().unwrap();
        assert_eq!(security.category, CheckCategory::Security);
        assert_eq!(security.status, CheckStatus::Present);
        assert_eq!(report.present_count(), 1);
    }

    #[test]
    fn test_custom_expectations() {
        let validator = StructuralValidator::new(ExpectationSet {
            paths: &["/only"],
            schemas: &[],
            security_scheme: "apiKey",
        });
        let report = validator.validate(&json!({"paths": {"/only": {}}}));

        assert_eq!(report.checks.len(), 2);
        assert_eq!(report.checks[0].status, CheckStatus::Present);
        assert_eq!(report.checks[1].identifier, "apiKey");
        assert_eq!(report.checks[1].status, CheckStatus::Missing);
    }
}

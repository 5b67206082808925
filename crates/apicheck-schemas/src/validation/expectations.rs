//! The fixed lists of keys a document is expected to define
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use crate::validation::report::CheckCategory;

/// Where in the document each category of expectation is looked up
pub const PATHS_SECTION: &[&str] = &["paths"];
pub const SCHEMAS_SECTION: &[&str] = &["components", "schemas"];
pub const SECURITY_SCHEMES_SECTION: &[&str] = &["components", "securitySchemes"];

/// Ordered expectation lists checked against a document
///
/// Order is significant: checks are reported in list order, paths first,
/// then schemas, then the security scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectationSet {
    /// Keys required under `paths`
    pub paths: &'static [&'static str],
    /// Keys required under `components.schemas`
    pub schemas: &'static [&'static str],
    /// Key required under `components.securitySchemes`
    pub security_scheme: &'static str,
}

impl ExpectationSet {
    /// Expectations for the users/posts service description
    pub const DEFAULT: ExpectationSet = ExpectationSet {
        paths: &[
            "/users/register",
            "/users/login",
            "/users/me",
            "/posts",
            "/posts/{id}",
            "/health",
        ],
        schemas: &[
            "User",
            "CreateUserDto",
            "LoginDto",
            "AuthResponse",
            "Post",
            "CreatePostDto",
            "ApiResponse",
            "ApiError",
        ],
        security_scheme: "bearerAuth",
    };

    /// Total number of checks this set produces
    pub fn check_count(&self) -> usize {
        self.paths.len() + self.schemas.len() + 1
    }

    /// Every expectation in report order, paired with its category and the
    /// section it must appear in
    pub fn iter(&self) -> impl Iterator<Item = (CheckCategory, &'static [&'static str], &'static str)> + '_ {
        let paths = self
            .paths
            .iter()
            .map(|id| (CheckCategory::Path, PATHS_SECTION, *id));
        let schemas = self
            .schemas
            .iter()
            .map(|id| (CheckCategory::Schema, SCHEMAS_SECTION, *id));
        let security = std::iter::once((
            CheckCategory::Security,
            SECURITY_SCHEMES_SECTION,
            self.security_scheme,
        ));

        paths.chain(schemas).chain(security)
    }

    /// Whether `identifier` is one of this set's expectations for `category`
    pub fn contains(&self, category: CheckCategory, identifier: &str) -> bool {
        match category {
            CheckCategory::Path => self.paths.iter().any(|p| *p == identifier),
            CheckCategory::Schema => self.schemas.iter().any(|s| *s == identifier),
            CheckCategory::Security => self.security_scheme == identifier,
            CheckCategory::Metadata => false,
        }
    }
}

impl Default for ExpectationSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

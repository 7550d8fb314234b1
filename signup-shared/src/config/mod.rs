//! # Configuration
//!
//! Resolution of the registration API root for each deployment environment.

use strum::{AsRefStr, EnumString};

/// Version prefix appended to every environment root.
pub const API_VERSION_PATH: &str = "/api/1.0";

/// Path of the user registration endpoint, relative to the API root.
pub const USERS_PATH: &str = "users";

/// Deployment environment the frontend was built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApiEnvironment {
    /// Local backend on port 3000.
    #[default]
    Development,
    /// Backend started by the end-to-end test setup.
    Test,
    /// Deployed backend.
    Production,
}

impl ApiEnvironment {
    /// Parses an environment name, falling back to [`ApiEnvironment::Development`]
    /// for unknown or missing values.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    }

    /// Origin of the backend for this environment.
    #[must_use]
    pub const fn origin(self) -> &'static str {
        match self {
            Self::Development => "http://localhost:3000",
            Self::Test => "http://localhost:5173",
            Self::Production => "define-it-later",
        }
    }

    /// Full API root, including the version prefix.
    #[must_use]
    pub fn api_root(self) -> String {
        format!("{}{API_VERSION_PATH}", self.origin())
    }
}

/// Picks the API root: an explicit override wins, otherwise the environment's root.
#[must_use]
pub fn resolve_api_root(environment: ApiEnvironment, override_root: Option<&str>) -> String {
    match override_root.map(str::trim) {
        Some(root) if !root.is_empty() => root.trim_end_matches('/').to_string(),
        _ => environment.api_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("development"), ApiEnvironment::Development)]
    #[test_case(Some("TEST"), ApiEnvironment::Test)]
    #[test_case(Some(" production "), ApiEnvironment::Production)]
    #[test_case(Some("staging"), ApiEnvironment::Development)]
    #[test_case(None, ApiEnvironment::Development)]
    fn test_environment_from_name(name: Option<&str>, expected: ApiEnvironment) {
        assert_eq!(ApiEnvironment::from_name(name), expected);
    }

    #[test]
    fn test_api_roots() {
        assert_eq!(
            ApiEnvironment::Development.api_root(),
            "http://localhost:3000/api/1.0"
        );
        assert_eq!(ApiEnvironment::Test.api_root(), "http://localhost:5173/api/1.0");
        assert!(ApiEnvironment::Production.api_root().ends_with("/api/1.0"));
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        assert_eq!(
            resolve_api_root(ApiEnvironment::Test, Some("https://example.org/api/1.0/")),
            "https://example.org/api/1.0"
        );
    }

    #[test]
    fn test_blank_override_is_ignored() {
        assert_eq!(
            resolve_api_root(ApiEnvironment::Development, Some("  ")),
            "http://localhost:3000/api/1.0"
        );
        assert_eq!(
            resolve_api_root(ApiEnvironment::Test, None),
            "http://localhost:5173/api/1.0"
        );
    }
}

//! Frontend configuration module
//!
//! Build-time selection of the registration API and request settings.

use shared::config::{ApiEnvironment, resolve_api_root};

/// Default time allowed for a registration request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Frontend configuration for the registration API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Environment the bundle was built for
    pub environment: ApiEnvironment,
    /// API root, including the version prefix
    pub api_root: String,
    /// Client-side timeout of the registration request
    pub request_timeout_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("SIGNUP_ENV"),
            option_env!("SIGNUP_API_ROOT"),
            option_env!("SIGNUP_REQUEST_TIMEOUT_MS"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the configuration from raw build-time values.
    pub fn from_values(
        environment: Option<&str>,
        api_root: Option<&str>,
        request_timeout_ms: Option<&str>,
    ) -> Self {
        let environment = ApiEnvironment::from_name(environment);
        let request_timeout_ms = request_timeout_ms
            .and_then(|value| value.trim().parse().ok())
            .filter(|&value: &u32| value > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            environment,
            api_root: resolve_api_root(environment, api_root),
            request_timeout_ms,
        }
    }

    /// Get the API root
    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

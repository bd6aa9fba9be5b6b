//! Client configuration: base address selection and the request policy.
//!
//! The base address is resolved once at startup. The `GATEPASS_API_URL`
//! environment variable wins; otherwise the default for the profile named
//! by `GATEPASS_ENV` is used (`development` when unset).

use std::time::Duration;

/// Environment variable naming the active deployment profile.
const PROFILE_VAR: &str = "GATEPASS_ENV";

/// Environment variable overriding the base address regardless of profile.
const API_URL_VAR: &str = "GATEPASS_API_URL";

/// Base address for local development and test backends.
const DEVELOPMENT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Base address for the hosted service.
const PRODUCTION_BASE_URL: &str = "https://api.gatepass.app";

/// HTTP request timeout in seconds.
/// 10s allows for slow mobile links while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Number of retries after a transport-level failure.
const RETRY_ATTEMPTS: u32 = 3;

/// Delay between retry attempts in milliseconds.
const RETRY_DELAY_MS: u64 = 1000;

/// Deployment profile selecting the default base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
    Test,
}

impl Profile {
    /// Read the profile from the environment, defaulting to development.
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_VAR).as_deref() {
            Ok("production") => Profile::Production,
            Ok("test") => Profile::Test,
            _ => Profile::Development,
        }
    }

    /// Default base address for this profile.
    pub fn default_base_url(self) -> &'static str {
        match self {
            Profile::Development | Profile::Test => DEVELOPMENT_BASE_URL,
            Profile::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Base address and request policy for the API client.
///
/// The policy values are process-wide constants, not per-call knobs; tests
/// construct the struct directly to shrink them.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl ApiConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Profile::from_env().default_base_url().to_string());
        Self::with_base_url(base_url)
    }

    /// Default request policy against the given base address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            retry_attempts: RETRY_ATTEMPTS,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

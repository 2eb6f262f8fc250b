//! # Configuration Management
//!
//! Connection settings for the SOAR backend. Values come from the environment
//! (optionally seeded from a `.env` file) and can be overridden on the command
//! line.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::Validate;

/// Base URL of the SOAR platform, e.g. `https://tenant.siemplify-soar.com`
pub const ENV_SOAR_URL: &str = "SOAR_URL";
/// API key sent as the `AppKey` header
pub const ENV_SOAR_APP_KEY: &str = "SOAR_APP_KEY";
/// HTTP timeout in seconds
pub const ENV_SOAR_TIMEOUT_SECONDS: &str = "SOAR_TIMEOUT_SECONDS";
/// `json` switches log output to JSON lines
pub const ENV_SOAR_LOG_FORMAT: &str = "SOAR_LOG_FORMAT";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// SOAR backend connection configuration
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct SoarConfig {
    /// Base URL of the SOAR API
    #[validate(url(message = "SOAR URL must be a valid absolute URL"))]
    pub base_url: String,

    /// App key for the `AppKey` header; requests are sent unauthenticated when absent
    pub app_key: Option<String>,

    /// Per-request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

impl fmt::Debug for SoarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoarConfig")
            .field("base_url", &self.base_url)
            .field("app_key", &self.app_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl SoarConfig {
    /// Create a configuration for the given base URL with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), app_key: None, timeout_seconds: DEFAULT_TIMEOUT_SECONDS }
    }

    /// Set the app key
    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None, None, None)
    }

    /// Create configuration from environment variables, explicit values taking
    /// precedence (e.g. command line flags)
    pub fn from_env_with(
        base_url: Option<String>,
        app_key: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => std::env::var(ENV_SOAR_URL).map_err(|_| {
                Error::config(format!("{} environment variable is required", ENV_SOAR_URL))
            })?,
        };

        let app_key = app_key
            .or_else(|| std::env::var(ENV_SOAR_APP_KEY).ok())
            .filter(|key| !key.trim().is_empty());

        let timeout_seconds = match timeout_seconds {
            Some(timeout) => timeout,
            None => match std::env::var(ENV_SOAR_TIMEOUT_SECONDS) {
                Ok(raw) => raw.trim().parse().map_err(|e| {
                    Error::config(format!("Invalid {}: {}", ENV_SOAR_TIMEOUT_SECONDS, e))
                })?,
                Err(_) => DEFAULT_TIMEOUT_SECONDS,
            },
        };

        let config = Self { base_url, app_key, timeout_seconds };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(Error::from)
    }

    /// Request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Base URL without a trailing slash, ready for endpoint paths to be appended
    pub fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

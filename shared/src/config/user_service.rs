//! Remote user-service configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Endpoint of the service that owns user accounts
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserServiceConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8082"),
            timeout_secs: 10,
        }
    }
}

impl UserServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let base_url = std::env::var("USER_SERVICE_URL").unwrap_or(defaults.base_url);
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs: env_or("USER_SERVICE_TIMEOUT_SECS", defaults.timeout_secs)?,
        })
    }
}

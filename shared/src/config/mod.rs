//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing, password hashing and credential source
//! - `database` - MySQL connection pool for the credential table
//! - `environment` - Environment detection
//! - `server` - HTTP server binding
//! - `user_service` - Remote user-service endpoint

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod user_service;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CredentialSource, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use user_service::UserServiceConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Remote user-service configuration
    pub user_service: UserServiceConfig,

    /// Database configuration (only used with the `mysql` credential source)
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Unset variables take their defaults. A variable that is set but does
    /// not parse is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env()?,
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            user_service: UserServiceConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
        })
    }

    /// Whether the signing secret must be replaced before serving traffic
    pub fn has_insecure_secret(&self) -> bool {
        self.environment.is_production() && self.auth.jwt.is_using_default_secret()
    }
}

/// An environment variable was set to a value that does not parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

/// Read an environment variable and parse it, falling back to `default` when unset
pub(crate) fn env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    parse_or(key, std::env::var(key).ok(), default)
}

/// Parse `raw` for `key`; blank counts as unset
pub(crate) fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) if !value.trim().is_empty() => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError {
                key: key.to_string(),
                value,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

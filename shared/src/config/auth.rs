//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for HS256 signing
    pub secret: String,

    /// Session token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Algorithm for JWT signing (HS256 or RS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// PEM private key path (RS256 only)
    #[serde(default)]
    pub private_key_path: Option<String>,

    /// PEM public key path (RS256 only)
    #[serde(default)]
    pub public_key_path: Option<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 3600, // 1 hour
            issuer: String::from("scalable-auth"),
            audience: String::from("scalable-api"),
            algorithm: default_algorithm(),
            private_key_path: None,
            public_key_path: None,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set session token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry)?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            algorithm: std::env::var("JWT_ALGORITHM")
                .map(|a| a.to_uppercase())
                .unwrap_or(defaults.algorithm),
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH").ok(),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH").ok(),
        })
    }
}

/// Where stored credentials are read from during login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialSource {
    /// Look the user up through the remote user-service
    #[default]
    UserService,
    /// Read the `users` table directly
    Mysql,
}

impl std::str::FromStr for CredentialSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user-service" | "user_service" | "http" => Ok(CredentialSource::UserService),
            "mysql" | "database" | "db" => Ok(CredentialSource::Mysql),
            _ => Err(format!("Invalid credential source: {}", s)),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Credential lookup backend
    #[serde(default)]
    pub credential_source: CredentialSource,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
            credential_source: env_or("CREDENTIAL_SOURCE", CredentialSource::default())?,
        })
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.issuer, "scalable-auth");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_minutes(30);
        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.access_token_expiry, 1800);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_credential_source_from_str() {
        assert_eq!("user-service".parse::<CredentialSource>(), Ok(CredentialSource::UserService));
        assert_eq!("MySQL".parse::<CredentialSource>(), Ok(CredentialSource::Mysql));
        assert!("ldap".parse::<CredentialSource>().is_err());
    }
}

//! Shared configuration and common types for the Scalable Auth server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from the environment
//! - The error response body returned by every endpoint
//! - Stable error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CredentialSource, DatabaseConfig, Environment, JwtConfig,
    ServerConfig, UserServiceConfig,
};
pub use errors::{error_codes, ErrorResponse};

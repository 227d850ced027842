//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `sa_core`:
//!
//! - **Clients**: reqwest client for the remote user-service, used both to
//!   create accounts and to look up stored credentials
//! - **Database**: MySQL credential repository using SQLx
//! - **Bootstrap**: builds a ready `AuthService` from `AppConfig`

use sa_core::errors::DomainError;

pub mod bootstrap;
pub mod clients;

pub mod database;

pub use bootstrap::{build_auth_service, token_service_config, AppAuthService, ConfiguredCredentialRepository};
pub use clients::UserServiceClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::unreachable("credential-store", e.to_string()),
            InfrastructureError::Http(e) => match e.status() {
                Some(status) => DomainError::rejected("user-service", status.as_u16(), e.to_string()),
                None => DomainError::unreachable("user-service", e.to_string()),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_becomes_internal() {
        let err: DomainError = InfrastructureError::Config("bad".to_string()).into();
        assert_eq!(
            err,
            DomainError::Internal {
                message: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_database_error_becomes_unavailable() {
        let err: DomainError = InfrastructureError::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(
            err,
            DomainError::CollaboratorUnavailable { ref service, status: None, .. } if service == "credential-store"
        ));
    }
}

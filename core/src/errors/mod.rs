//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// A collaborator (credential store, user-service) could not be reached
    /// or answered with an error. `status` carries the remote status code
    /// when the collaborator did answer.
    #[error("Collaborator unavailable: {service}: {message}")]
    CollaboratorUnavailable {
        service: String,
        status: Option<u16>,
        message: String,
    },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Collaborator could not be reached at all
    pub fn unreachable(service: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::CollaboratorUnavailable {
            service: service.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Collaborator answered with a non-success status
    pub fn rejected(service: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        DomainError::CollaboratorUnavailable {
            service: service.into(),
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn is_wrong_credentials(&self) -> bool {
        matches!(self, DomainError::Auth(AuthError::WrongCredentials))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

//! Error types for authentication and token operations
//!
//! Messages here are for logs. The presentation layer picks the
//! user-facing message and status for each variant.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username, mismatched password, or a credential store
    /// that did not report the principal as authenticated
    #[error("Wrong credentials")]
    WrongCredentials,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Key load error: {message}")]
    KeyLoadError { message: String },
}

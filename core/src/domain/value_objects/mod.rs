//! Value objects exchanged between the auth service and its callers.

pub mod auth_request;
pub mod auth_result;

// Re-export commonly used types
pub use auth_request::{LoginCommand, RegistrationRequest};
pub use auth_result::{AuthResult, SessionToken};

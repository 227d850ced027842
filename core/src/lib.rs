//! # Scalable Auth Core
//!
//! Core business logic and domain layer for the auth service.
//! This crate contains domain entities, the authentication service,
//! the collaborator traits it depends on, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Credential, Principal, RegisteredAccount, Role};
pub use domain::value_objects::{AuthResult, LoginCommand, RegistrationRequest, SessionToken};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{CredentialRepository, InMemoryCredentialRepository};
pub use services::{
    AccountCreationService, AuthService, CredentialStore, JwtTokenIssuer, RepositoryCredentialStore,
    Rs256KeyManager, TokenIssuer, TokenServiceConfig,
};

//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod credential;
pub mod token;

// Re-export commonly used types
pub use account::AccountCreationService;
pub use auth::AuthService;
pub use credential::{CredentialStore, RepositoryCredentialStore};
pub use token::{JwtTokenIssuer, Rs256KeyManager, TokenIssuer, TokenServiceConfig};

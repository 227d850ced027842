//! Domain entities representing core business objects.

pub mod account;
pub mod credential;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::RegisteredAccount;
pub use credential::{Credential, Principal, Role};
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};

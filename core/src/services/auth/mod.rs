//! Authentication service module
//!
//! Login checks a username/password pair through a `CredentialStore` and
//! issues a session token on success. Registration forwards the request to
//! the account-creation collaborator.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;

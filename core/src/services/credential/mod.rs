//! Credential verification
//!
//! `CredentialStore` is the seam the authentication service checks
//! username/password pairs through. `RepositoryCredentialStore` is the
//! default implementation: it looks the account up in a
//! `CredentialRepository` and compares the password against the stored
//! bcrypt hash.

pub mod password;
mod store;


pub use store::{CredentialStore, RepositoryCredentialStore};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::value_objects::AuthResult;
use crate::errors::DomainError;
use crate::repositories::CredentialRepository;

use super::password::verify_password;

/// Verifies a username/password pair against an account store
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check a username/password pair
    ///
    /// # Returns
    /// * `Ok(AuthResult)` - The store's verdict; anything but
    ///   `authenticated == true` counts as a failed login
    /// * `Err(DomainError)` - The store could not be consulted
    async fn verify(&self, username: &str, password: &str) -> Result<AuthResult, DomainError>;
}

/// Credential store over a `CredentialRepository` holding bcrypt hashes
pub struct RepositoryCredentialStore<R: CredentialRepository> {
    repository: Arc<R>,
}

impl<R: CredentialRepository> RepositoryCredentialStore<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CredentialRepository + 'static> CredentialStore for RepositoryCredentialStore<R> {
    async fn verify(&self, username: &str, password: &str) -> Result<AuthResult, DomainError> {
        let credential = match self.repository.find_by_username(username).await? {
            Some(credential) => credential,
            None => {
                debug!(username = %username, "No stored credential for username");
                return Ok(AuthResult::rejected());
            }
        };

        // bcrypt is CPU bound; keep it off the async workers.
        let plain = password.to_owned();
        let hash = credential.password_hash.clone();
        let outcome = tokio::task::spawn_blocking(move || verify_password(&plain, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?;

        match outcome {
            Ok(true) => Ok(AuthResult::authenticated(credential.principal())),
            Ok(false) => Ok(AuthResult::rejected()),
            Err(e) => {
                warn!(
                    username = %username,
                    error = %e,
                    "Stored password hash is malformed, treating as mismatch"
                );
                Ok(AuthResult::rejected())
            }
        }
    }
}

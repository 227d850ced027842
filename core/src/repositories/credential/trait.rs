//! Credential repository trait defining read access to the account store.
//!
//! The auth service never writes credentials. Implementations read them
//! from wherever accounts live (the user-service, a database table, memory).

use async_trait::async_trait;

use crate::domain::entities::Credential;
use crate::errors::DomainError;

/// Read-only lookup of stored credentials
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sa_core::repositories::CredentialRepository;
/// use sa_core::domain::entities::Credential;
/// use sa_core::errors::DomainError;
///
/// struct LdapCredentialRepository {
///     // directory connection
/// }
///
/// #[async_trait]
/// impl CredentialRepository for LdapCredentialRepository {
///     async fn find_by_username(
///         &self,
///         username: &str,
///     ) -> Result<Option<Credential>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find the stored credential for a username
    ///
    /// # Arguments
    /// * `username` - The unique username
    ///
    /// # Returns
    /// * `Ok(Some(Credential))` - Credential found
    /// * `Ok(None)` - No account with that username
    /// * `Err(DomainError)` - The store could not be reached or failed;
    ///   implementations report this as `DomainError::CollaboratorUnavailable`
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError>;
}

//! Account creation collaborator

use async_trait::async_trait;

use crate::domain::entities::RegisteredAccount;
use crate::domain::value_objects::RegistrationRequest;
use crate::errors::DomainError;

/// External service that owns account creation
#[async_trait]
pub trait AccountCreationService: Send + Sync {
    /// Create an account from a registration request
    ///
    /// # Arguments
    /// * `request` - Username, password and role, sent as submitted
    ///
    /// # Returns
    /// * `Ok(RegisteredAccount)` - The account as the collaborator reports it
    /// * `Err(DomainError)` - The collaborator was unreachable or refused;
    ///   a refusal carries its status code in `CollaboratorUnavailable`
    async fn create(&self, request: &RegistrationRequest) -> Result<RegisteredAccount, DomainError>;
}

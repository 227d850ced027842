//! End-to-end login and registration through the public API of sa_core

use std::sync::Arc;

use async_trait::async_trait;
use sa_core::services::credential::password::hash_password;
use sa_core::{
    AccountCreationService, AuthError, AuthService, Credential, DomainError,
    InMemoryCredentialRepository, JwtTokenIssuer, LoginCommand, RegisteredAccount,
    RegistrationRequest, RepositoryCredentialStore, Role, TokenIssuer, TokenServiceConfig,
};

/// Account service that registers into the same in-memory repository
struct LocalAccounts {
    repository: Arc<InMemoryCredentialRepository>,
}

#[async_trait]
impl AccountCreationService for LocalAccounts {
    async fn create(&self, request: &RegistrationRequest) -> Result<RegisteredAccount, DomainError> {
        let hash = hash_password(&request.password, 4)?;
        self.repository
            .insert(Credential::new(request.username.clone(), hash, request.role))
            .await;
        let id = format!("u{}", self.repository.len().await);
        Ok(RegisteredAccount::new(id, request.username.clone(), request.role))
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let repository = Arc::new(InMemoryCredentialRepository::new());
    let issuer = Arc::new(JwtTokenIssuer::new(TokenServiceConfig::hs256("integration-secret")).unwrap());
    let service = AuthService::new(
        Arc::new(RepositoryCredentialStore::new(repository.clone())),
        issuer.clone(),
        Arc::new(LocalAccounts {
            repository: repository.clone(),
        }),
    );

    let before = service.login(LoginCommand::new("bob", "pw123")).await;
    assert_eq!(before, Err(DomainError::Auth(AuthError::WrongCredentials)));

    let account = service
        .register(RegistrationRequest::new("bob", "pw123", Role::Freelancer))
        .await
        .unwrap();
    assert_eq!(account, RegisteredAccount::new("u1", "bob", Role::Freelancer));

    let session = service.login(LoginCommand::new("bob", "pw123")).await.unwrap();
    let claims = issuer.verify(&session.token).unwrap();
    assert_eq!(claims.username(), "bob");

    let wrong = service.login(LoginCommand::new("bob", "pw1234")).await;
    assert_eq!(wrong, Err(DomainError::Auth(AuthError::WrongCredentials)));
}

//! Wiring of the authentication service from configuration

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::Algorithm;
use tracing::info;

use sa_core::domain::entities::Credential;
use sa_core::errors::DomainError;
use sa_core::repositories::CredentialRepository;
use sa_core::services::{AuthService, JwtTokenIssuer, RepositoryCredentialStore, TokenServiceConfig};
use sa_shared::config::{AppConfig, CredentialSource, JwtConfig};

use crate::clients::UserServiceClient;
use crate::database::{DatabasePool, MySqlCredentialRepository};
use crate::InfrastructureError;

/// Credential repository chosen by `CREDENTIAL_SOURCE`
pub enum ConfiguredCredentialRepository {
    UserService(UserServiceClient),
    Mysql(MySqlCredentialRepository),
}

#[async_trait]
impl CredentialRepository for ConfiguredCredentialRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        match self {
            Self::UserService(client) => client.find_by_username(username).await,
            Self::Mysql(repository) => repository.find_by_username(username).await,
        }
    }
}

/// Authentication service as assembled for the HTTP API
pub type AppAuthService = AuthService<
    RepositoryCredentialStore<ConfiguredCredentialRepository>,
    JwtTokenIssuer,
    UserServiceClient,
>;

/// Longest accepted session lifetime (one year)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Translate JWT settings into the token issuer's configuration
pub fn token_service_config(jwt: &JwtConfig) -> Result<TokenServiceConfig, InfrastructureError> {
    let algorithm = Algorithm::from_str(&jwt.algorithm)
        .map_err(|_| InfrastructureError::Config(format!("Unsupported JWT_ALGORITHM: {}", jwt.algorithm)))?;
    if !matches!(algorithm, Algorithm::HS256 | Algorithm::RS256) {
        return Err(InfrastructureError::Config(format!(
            "JWT_ALGORITHM must be HS256 or RS256, got {}",
            jwt.algorithm
        )));
    }

    if jwt.access_token_expiry <= 0 || jwt.access_token_expiry > MAX_TOKEN_EXPIRY_SECONDS {
        return Err(InfrastructureError::Config(format!(
            "JWT_ACCESS_TOKEN_EXPIRY must be between 1 and {} seconds, got {}",
            MAX_TOKEN_EXPIRY_SECONDS, jwt.access_token_expiry
        )));
    }

    Ok(TokenServiceConfig {
        jwt_secret: jwt.secret.clone(),
        algorithm,
        expiry_seconds: jwt.access_token_expiry,
        issuer: jwt.issuer.clone(),
        audience: jwt.audience.clone(),
        private_key_path: jwt.private_key_path.clone(),
        public_key_path: jwt.public_key_path.clone(),
    })
}

async fn credential_repository(config: &AppConfig) -> Result<ConfiguredCredentialRepository, InfrastructureError> {
    match config.auth.credential_source {
        CredentialSource::UserService => Ok(ConfiguredCredentialRepository::UserService(
            UserServiceClient::new(&config.user_service)?,
        )),
        CredentialSource::Mysql => {
            let pool = DatabasePool::new(&config.database).await?;
            Ok(ConfiguredCredentialRepository::Mysql(MySqlCredentialRepository::new(
                pool.get_pool().clone(),
            )))
        }
    }
}

/// Build the authentication service and its collaborators
///
/// # Errors
/// * `InfrastructureError::Config` - Invalid URL, algorithm or key files
/// * `InfrastructureError::Database` - The MySQL pool could not be opened
pub async fn build_auth_service(config: &AppConfig) -> Result<AppAuthService, InfrastructureError> {
    let token_config = token_service_config(&config.auth.jwt)?;
    let token_issuer = JwtTokenIssuer::new(token_config)
        .map_err(|e| InfrastructureError::Config(format!("Failed to initialise token issuer: {}", e)))?;

    let repository = credential_repository(config).await?;
    let account_service = UserServiceClient::new(&config.user_service)?;

    info!(
        credential_source = ?config.auth.credential_source,
        user_service = %config.user_service.base_url,
        algorithm = ?token_issuer.algorithm(),
        "Authentication service assembled"
    );

    Ok(AuthService::new(
        Arc::new(RepositoryCredentialStore::new(Arc::new(repository))),
        Arc::new(token_issuer),
        Arc::new(account_service),
    ))
}

//! Client for the remote user-service
//!
//! The user-service owns accounts. This client calls two of its endpoints:
//!
//! - `POST {base}/v1/user/save` creates an account and answers `{id, username, role}`
//! - `GET {base}/v1/user/getUserByUsername/{username}` answers
//!   `{id, username, password, role}` where `password` is the stored bcrypt hash
//!
//! Transport failures map to `CollaboratorUnavailable` without a status. A
//! non-2xx answer maps to `CollaboratorUnavailable` with the remote status and
//! body, except a 404 on lookup which means "no such user".

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Deserializer};
use tracing::{debug, error, warn};

use sa_core::domain::entities::{Credential, RegisteredAccount, Role};
use sa_core::domain::value_objects::RegistrationRequest;
use sa_core::errors::DomainError;
use sa_core::repositories::CredentialRepository;
use sa_core::services::AccountCreationService;
use sa_shared::config::UserServiceConfig;

use crate::InfrastructureError;

const SERVICE_NAME: &str = "user-service";

/// Account as answered by `POST /v1/user/save`
#[derive(Debug, Deserialize)]
struct SavedUser {
    #[serde(deserialize_with = "id_as_string")]
    id: String,
    username: String,
    role: Role,
}

/// Account as answered by `GET /v1/user/getUserByUsername/{username}`
#[derive(Debug, Deserialize)]
struct StoredUser {
    username: String,
    /// bcrypt hash
    password: String,
    role: Role,
}

/// Accept numeric or string identifiers
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// reqwest client for the user-service
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UserServiceClient {
    /// Create a client for the configured user-service
    ///
    /// # Returns
    /// * `Ok(UserServiceClient)` - Client ready to use
    /// * `Err(InfrastructureError::Config)` - The base URL is not a valid URL
    pub fn new(config: &UserServiceConfig) -> Result<Self, InfrastructureError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            InfrastructureError::Config(format!("Invalid USER_SERVICE_URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(InfrastructureError::Config(format!(
                "USER_SERVICE_URL cannot be used as a base: {}",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn unreachable(err: reqwest::Error) -> DomainError {
        error!(error = %err, "User-service request failed");
        DomainError::unreachable(SERVICE_NAME, err.to_string())
    }

    /// Turn a non-success response into a rejection carrying the remote body
    async fn rejection(response: reqwest::Response) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        } else {
            body
        };
        warn!(status = status.as_u16(), message = %message, "User-service rejected request");
        DomainError::rejected(SERVICE_NAME, status.as_u16(), message)
    }

    fn malformed(err: impl std::fmt::Display) -> DomainError {
        DomainError::rejected(
            SERVICE_NAME,
            StatusCode::BAD_GATEWAY.as_u16(),
            format!("Malformed user-service response: {}", err),
        )
    }
}

#[async_trait]
impl AccountCreationService for UserServiceClient {
    async fn create(&self, request: &RegistrationRequest) -> Result<RegisteredAccount, DomainError> {
        let url = self.endpoint(&["v1", "user", "save"]);
        debug!(url = %url, username = %request.username, "Creating account");

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(Self::unreachable)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let saved: SavedUser = response.json().await.map_err(Self::malformed)?;
        Ok(RegisteredAccount::new(saved.id, saved.username, saved.role))
    }
}

#[async_trait]
impl CredentialRepository for UserServiceClient {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, DomainError> {
        let url = self.endpoint(&["v1", "user", "getUserByUsername", username]);
        debug!(url = %url, "Looking up credential");

        let response = self.http.get(url).send().await.map_err(Self::unreachable)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body = response.text().await.map_err(Self::unreachable)?;
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }

        let user: StoredUser = serde_json::from_str(trimmed).map_err(Self::malformed)?;
        Ok(Some(Credential::new(user.username, user.password, user.role)))
    }
}

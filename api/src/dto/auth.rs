use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use sa_core::domain::entities::{RegisteredAccount, Role};
use sa_core::domain::value_objects::{LoginCommand, RegistrationRequest};

/// Rejects empty and whitespace-only strings
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl From<LoginRequest> for LoginCommand {
    fn from(request: LoginRequest) -> Self {
        LoginCommand::new(request.username, request.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom = "not_blank")]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,

    /// CLIENT, FREELANCER or ADMIN
    #[validate(required)]
    pub role: Option<Role>,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl RegisterRequest {
    /// Convert a validated request; `None` if the role is missing
    pub fn into_registration(self) -> Option<RegistrationRequest> {
        let role = self.role?;
        Some(RegistrationRequest::new(self.username, self.password, role))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<RegisteredAccount> for RegisterResponse {
    fn from(account: RegisteredAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

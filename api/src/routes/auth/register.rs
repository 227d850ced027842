use actix_web::{web, HttpResponse};
use validator::Validate;

use sa_core::errors::DomainError;
use sa_core::services::{AccountCreationService, CredentialStore, TokenIssuer};

use super::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/register
///
/// Validates the request fields, then forwards the account to the
/// user-service and returns its answer as-is.
///
/// # Request Body
///
/// ```json
/// { "username": "bob", "password": "pw123", "role": "CLIENT" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "id": "u1", "username": "bob", "role": "CLIENT" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: blank username, empty password or missing role
/// - 4xx: the user-service's own rejection, passed through
/// - 503 Service Unavailable: the user-service could not be reached or failed
pub async fn register<C, T, A>(
    state: web::Data<AppState<C, T, A>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    C: CredentialStore + 'static,
    T: TokenIssuer + 'static,
    A: AccountCreationService + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    log::info!("Processing registration for username: {}", request.username);

    let registration = match request.into_registration() {
        Some(registration) => registration,
        None => {
            return handle_domain_error(DomainError::Validation {
                message: "role is required".to_string(),
            })
        }
    };

    match state.auth_service.register(registration).await {
        Ok(account) => HttpResponse::Ok().json(RegisterResponse::from(account)),
        Err(error) => handle_domain_error(error),
    }
}

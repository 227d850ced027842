use actix_web::{web, HttpResponse};
use validator::Validate;

use sa_core::services::{AccountCreationService, CredentialStore, TokenIssuer};

use super::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "correct-pw" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJhbGciOi..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: blank username or empty password
/// - 401 Unauthorized: `wrong_credentials`
/// - 503 Service Unavailable: the credential store could not be reached
pub async fn login<C, T, A>(
    state: web::Data<AppState<C, T, A>>,
    request: web::Json<LoginRequest>,
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

    log::info!("Processing login for username: {}", request.username);

    match state.auth_service.login(request.into()).await {
        Ok(session) => HttpResponse::Ok().json(LoginResponse {
            token: session.token,
        }),
        Err(error) => handle_domain_error(error),
    }
}

use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};

use sa_core::errors::{DomainError, TokenError};
use sa_core::services::{AccountCreationService, CredentialStore, TokenIssuer};

use super::AppState;
use crate::dto::auth::ValidateResponse;
use crate::handlers::error::{handle_domain_error, missing_token};

/// Extracts Bearer token from Authorization header
pub(crate) fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Handler for GET /api/v1/auth/validate
///
/// Checks the bearer token's signature and claims. Nothing is looked up;
/// a token is valid for as long as its claims say so.
///
/// ## Success (200 OK)
/// ```json
/// { "username": "alice", "expires_at": "2025-01-01T12:00:00Z" }
/// ```
pub async fn validate<C, T, A>(req: HttpRequest, state: web::Data<AppState<C, T, A>>) -> HttpResponse
where
    C: CredentialStore + 'static,
    T: TokenIssuer + 'static,
    A: AccountCreationService + 'static,
{
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => return missing_token(),
    };

    let claims = match state.auth_service.token_issuer().verify(token) {
        Ok(claims) => claims,
        Err(error) => return handle_domain_error(error),
    };

    match claims.expires_at() {
        Some(expires_at) => HttpResponse::Ok().json(ValidateResponse {
            username: claims.sub,
            expires_at,
        }),
        None => handle_domain_error(DomainError::Token(TokenError::InvalidTokenFormat)),
    }
}

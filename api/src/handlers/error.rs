//! Mapping from domain and request errors to HTTP responses

use std::collections::HashMap;

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use sa_core::errors::{AuthError, DomainError, TokenError};
use sa_shared::{error_codes, ErrorResponse};

fn respond(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::WrongCredentials) => {
            log::info!("Rejected login: wrong credentials");
            respond(
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(error_codes::WRONG_CREDENTIALS, "Wrong credentials"),
            )
        }
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::Validation { message } => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message),
        ),
        DomainError::CollaboratorUnavailable {
            service,
            status,
            message,
        } => match status.and_then(|s| StatusCode::from_u16(s).ok()) {
            // The collaborator refused the request itself; pass its answer through.
            Some(code) if code.is_client_error() => {
                log::warn!("{} rejected request with {}: {}", service, code, message);
                respond(
                    code,
                    ErrorResponse::new(error_codes::COLLABORATOR_REJECTED, message)
                        .add_detail("service", service),
                )
            }
            _ => {
                log::error!("{} unavailable (status {:?}): {}", service, status, message);
                let mut body = ErrorResponse::new(
                    error_codes::COLLABORATOR_UNAVAILABLE,
                    format!("{} is unavailable", service),
                )
                .add_detail("service", service);
                if let Some(status) = status {
                    body = body.add_detail("status", status);
                }
                respond(StatusCode::SERVICE_UNAVAILABLE, body)
            }
        },
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
            )
        }
    }
}

fn handle_token_error(error: TokenError) -> HttpResponse {
    let (code, message) = match &error {
        TokenError::TokenExpired => (error_codes::TOKEN_EXPIRED, "Token has expired"),
        TokenError::TokenNotYetValid => (error_codes::TOKEN_NOT_YET_VALID, "Token is not yet valid"),
        TokenError::InvalidSignature | TokenError::InvalidTokenFormat => {
            (error_codes::TOKEN_INVALID, "Token is invalid")
        }
        TokenError::TokenGenerationFailed | TokenError::KeyLoadError { .. } => {
            log::error!("Token subsystem failure: {}", error);
            return respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
            );
        }
    };
    respond(StatusCode::UNAUTHORIZED, ErrorResponse::new(code, message))
}

/// 400 response listing the messages for each invalid field
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    log::warn!("Request validation failed: {:?}", field_errors);

    respond(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("validation_errors", field_errors),
    )
}

/// Error handler for bodies that are not valid JSON for the target DTO
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    log::warn!("Malformed JSON body: {}", message);
    let response = respond(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Malformed request body")
            .add_detail("reason", message),
    );
    actix_web::error::InternalError::from_response(err, response).into()
}

/// 401 for requests without a usable bearer token
pub fn missing_token() -> HttpResponse {
    respond(
        StatusCode::UNAUTHORIZED,
        ErrorResponse::new(error_codes::TOKEN_MISSING, "Missing bearer token"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_credentials_is_unauthorized() {
        let response = handle_domain_error(DomainError::Auth(AuthError::WrongCredentials));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_collaborator_client_error_passes_through() {
        let response = handle_domain_error(DomainError::rejected("user-service", 409, "taken"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_collaborator_server_error_is_unavailable() {
        let response = handle_domain_error(DomainError::rejected("user-service", 500, "boom"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = handle_domain_error(DomainError::unreachable("user-service", "refused"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_token_errors() {
        let expired = handle_domain_error(DomainError::Token(TokenError::TokenExpired));
        assert_eq!(expired.status(), StatusCode::UNAUTHORIZED);

        let key = handle_domain_error(DomainError::Token(TokenError::KeyLoadError {
            message: "missing".to_string(),
        }));
        assert_eq!(key.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_is_500() {
        let response = handle_domain_error(DomainError::Internal {
            message: "x".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

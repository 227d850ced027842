//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use sa_core::services::{AccountCreationService, CredentialStore, TokenIssuer};
use sa_shared::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::routes::auth::{login::login, register::register, validate::validate, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<C, T, A>(
    app_state: web::Data<AppState<C, T, A>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CredentialStore + 'static,
    T: TokenIssuer + 'static,
    A: AccountCreationService + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/login", web::post().to(login::<C, T, A>))
                    .route("/register", web::post().to(register::<C, T, A>))
                    .route("/validate", web::get().to(validate::<C, T, A>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "scalable-auth",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}

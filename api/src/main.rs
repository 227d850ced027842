use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use sa_api::app::create_app;
use sa_api::routes::auth::AppState;
use sa_infra::build_auth_service;
use sa_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_level()),
    );

    info!("Starting Scalable Auth API Server ({})", config.environment);

    if config.has_insecure_secret() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }
    if config.auth.jwt.is_using_default_secret() {
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    let auth_service = build_auth_service(&config)
        .await
        .context("Failed to initialise authentication service")?;
    let app_state = web::Data::new(AppState::new(Arc::new(auth_service)));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

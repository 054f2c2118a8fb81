use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};
use std::sync::Arc;

use iv_api::app::create_app;
use iv_api::routes::AppState;
use iv_core::repositories::InMemoryRecordStore;
use iv_core::services::token::{TokenService, TokenServiceConfig};
use iv_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize logger
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting ItemVault API Server ({})", config.environment);

    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the built-in development secret");
    }

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let records = Arc::new(InMemoryRecordStore::new());
    let app_state = web::Data::new(AppState::new(token_service, records));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}

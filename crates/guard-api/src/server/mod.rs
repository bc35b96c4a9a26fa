//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use guard_common::{AppConfig, AppError, JwtService};
use guard_db::{
    create_pool, PgBanLogRepository, PgBotRepository, PgGroupRepository, PgWarnLogRepository,
};
use guard_service::ServiceContextBuilder;
use guard_telegram::TelegramClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes get the logging stack but not the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let timeout = state.request_timeout();
    info!(timeout_secs = timeout.as_secs(), "Request timeout derived from Bot API timeout");

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
        timeout,
    );
    let health = apply_middleware(health_routes(), timeout);

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = guard_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create Bot API client
    let bot_api = Arc::new(TelegramClient::from_config(&config.telegram));
    info!(base_url = %bot_api.base_url(), "Bot API client ready");

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool.clone())
        .group_repo(Arc::new(PgGroupRepository::new(pool.clone())))
        .bot_repo(Arc::new(PgBotRepository::new(pool.clone())))
        .ban_log_repo(Arc::new(PgBanLogRepository::new(pool.clone())))
        .warn_log_repo(Arc::new(PgWarnLogRepository::new(pool)))
        .bot_api(bot_api)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr = tokio::net::lookup_host(&address)
        .await
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT {address}: {e}")))?
        .next()
        .ok_or_else(|| AppError::Config(format!("{address} did not resolve")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}

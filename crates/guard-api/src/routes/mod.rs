//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, moderation};
use crate::state::AppState;

/// Create the moderation router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/warn", post(moderation::warn_member))
        .route("/ban", post(moderation::ban_member))
        .route("/kick", post(moderation::kick_member))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

//! State shared by the moderation handlers

use std::sync::Arc;
use std::time::Duration;

use guard_common::{AppConfig, JwtService};
use guard_service::ServiceContext;

use crate::middleware::request_timeout;

/// Repositories, Bot API client and settings behind every route
///
/// The request deadline is fixed at construction from the Bot API timeout
/// so the router and the client never disagree about it.
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    request_timeout: Duration,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        let request_timeout = request_timeout(&config.telegram);
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
            request_timeout,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Verifies the owner bearer tokens
    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }

    /// Deadline applied to every request by the timeout layer
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("bot_api", &self.config.telegram.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

//! Service context - dependency container for services
//!
//! Holds the repositories, the Bot API client and the JWT service.

use std::sync::Arc;

use guard_common::auth::JwtService;
use guard_core::traits::{
    BanLogRepository, BotApi, BotRepository, GroupRepository, WarnLogRepository,
};
use guard_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// The pool is optional: it is only used by the readiness probe, and
/// contexts built over in-memory repositories have no database to probe.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    group_repo: Arc<dyn GroupRepository>,
    bot_repo: Arc<dyn BotRepository>,
    ban_log_repo: Arc<dyn BanLogRepository>,
    warn_log_repo: Arc<dyn WarnLogRepository>,

    // Remote
    bot_api: Arc<dyn BotApi>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        group_repo: Arc<dyn GroupRepository>,
        bot_repo: Arc<dyn BotRepository>,
        ban_log_repo: Arc<dyn BanLogRepository>,
        warn_log_repo: Arc<dyn WarnLogRepository>,
        bot_api: Arc<dyn BotApi>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            group_repo,
            bot_repo,
            ban_log_repo,
            warn_log_repo,
            bot_api,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context has one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    pub fn bot_repo(&self) -> &dyn BotRepository {
        self.bot_repo.as_ref()
    }

    pub fn ban_log_repo(&self) -> &dyn BanLogRepository {
        self.ban_log_repo.as_ref()
    }

    pub fn warn_log_repo(&self) -> &dyn WarnLogRepository {
        self.warn_log_repo.as_ref()
    }

    // === Remote ===

    /// Get the Telegram Bot API client
    pub fn bot_api(&self) -> &dyn BotApi {
        self.bot_api.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("bot_api", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    bot_repo: Option<Arc<dyn BotRepository>>,
    ban_log_repo: Option<Arc<dyn BanLogRepository>>,
    warn_log_repo: Option<Arc<dyn WarnLogRepository>>,
    bot_api: Option<Arc<dyn BotApi>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn bot_repo(mut self, repo: Arc<dyn BotRepository>) -> Self {
        self.bot_repo = Some(repo);
        self
    }

    pub fn ban_log_repo(mut self, repo: Arc<dyn BanLogRepository>) -> Self {
        self.ban_log_repo = Some(repo);
        self
    }

    pub fn warn_log_repo(mut self, repo: Arc<dyn WarnLogRepository>) -> Self {
        self.warn_log_repo = Some(repo);
        self
    }

    pub fn bot_api(mut self, api: Arc<dyn BotApi>) -> Self {
        self.bot_api = Some(api);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.group_repo.ok_or_else(|| ServiceError::validation("group_repo is required"))?,
            self.bot_repo.ok_or_else(|| ServiceError::validation("bot_repo is required"))?,
            self.ban_log_repo.ok_or_else(|| ServiceError::validation("ban_log_repo is required"))?,
            self.warn_log_repo.ok_or_else(|| ServiceError::validation("warn_log_repo is required"))?,
            self.bot_api.ok_or_else(|| ServiceError::validation("bot_api is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

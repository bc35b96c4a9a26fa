//! PostgreSQL implementation of BotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::Bot;
use guard_core::traits::{BotRepository, RepoResult};
use guard_core::value_objects::{BotId, BotToken, UserId};

use crate::models::BotModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BotRepository
#[derive(Clone)]
pub struct PgBotRepository {
    pool: PgPool,
}

impl PgBotRepository {
    /// Create a new PgBotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<BotModel> for Bot {
    fn from(model: BotModel) -> Self {
        Bot::new(
            BotId::new(model.id),
            UserId::new(model.user_id),
            BotToken::new(model.bot_token),
        )
    }
}

#[async_trait]
impl BotRepository for PgBotRepository {
    #[instrument(skip(self))]
    async fn find_owned(&self, id: BotId, owner_id: UserId) -> RepoResult<Option<Bot>> {
        let result = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, user_id, bot_token
            FROM telegram_bots
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(owner_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Bot::from))
    }
}

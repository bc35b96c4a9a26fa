//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::Group;
use guard_core::traits::{GroupRepository, RepoResult};
use guard_core::value_objects::{BotId, GroupId};

use crate::models::GroupModel;

use super::error::map_db_error;

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group::new(GroupId::new(model.id), BotId::new(model.telegram_bot_id))
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GroupId) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, telegram_bot_id
            FROM telegram_groups
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }
}

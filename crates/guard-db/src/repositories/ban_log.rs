//! PostgreSQL implementation of BanLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::BanLogEntry;
use guard_core::error::DomainError;
use guard_core::traits::{BanLogRepository, NewBanLog, RepoResult};
use guard_core::value_objects::{ChatId, GroupId, ModerationAction, UserId};

use crate::models::BanLogModel;

use super::error::{corrupt_row, map_db_error};

/// PostgreSQL implementation of BanLogRepository
///
/// Rows are only ever inserted.
#[derive(Clone)]
pub struct PgBanLogRepository {
    pool: PgPool,
}

impl PgBanLogRepository {
    /// Create a new PgBanLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFrom<BanLogModel> for BanLogEntry {
    type Error = DomainError;

    fn try_from(model: BanLogModel) -> Result<Self, Self::Error> {
        let action = model
            .action
            .parse::<ModerationAction>()
            .map_err(|e| corrupt_row("ban_logs", model.id, e))?;
        let offender_chat_id = ChatId::parse(&model.offender_chat_id)
            .map_err(|e| corrupt_row("ban_logs", model.id, e))?;

        Ok(BanLogEntry {
            id: model.id,
            owner_id: UserId::new(model.user_id),
            group_id: GroupId::new(model.group_id),
            offender_chat_id,
            action,
            reason: model.reason,
            banned_at: model.banned_at,
        })
    }
}

#[async_trait]
impl BanLogRepository for PgBanLogRepository {
    #[instrument(skip(self))]
    async fn create(&self, entry: &NewBanLog) -> RepoResult<BanLogEntry> {
        let model = sqlx::query_as::<_, BanLogModel>(
            r"
            INSERT INTO ban_logs (user_id, group_id, offender_chat_id, action, reason, banned_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW(), NOW())
            RETURNING id, user_id, group_id, offender_chat_id, action, reason, banned_at
            ",
        )
        .bind(entry.owner_id.into_inner())
        .bind(entry.group_id.into_inner())
        .bind(entry.offender_chat_id.as_str())
        .bind(entry.action.as_str())
        .bind(&entry.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        BanLogEntry::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_group(
        &self,
        owner_id: UserId,
        group_id: GroupId,
    ) -> RepoResult<Vec<BanLogEntry>> {
        let models = sqlx::query_as::<_, BanLogModel>(
            r"
            SELECT id, user_id, group_id, offender_chat_id, action, reason, banned_at
            FROM ban_logs
            WHERE user_id = $1 AND group_id = $2
            ORDER BY banned_at DESC, id DESC
            ",
        )
        .bind(owner_id.into_inner())
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(BanLogEntry::try_from).collect()
    }
}

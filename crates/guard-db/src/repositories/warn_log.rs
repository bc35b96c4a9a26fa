//! PostgreSQL implementation of WarnLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::WarnLogEntry;
use guard_core::error::DomainError;
use guard_core::traits::{RepoResult, WarnLogRepository, WarnRecord};
use guard_core::value_objects::{ChatId, GroupId, UserId};

use crate::models::WarnLogModel;

use super::error::{corrupt_row, map_db_error};

/// PostgreSQL implementation of WarnLogRepository
#[derive(Clone)]
pub struct PgWarnLogRepository {
    pool: PgPool,
}

impl PgWarnLogRepository {
    /// Create a new PgWarnLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TryFrom<WarnLogModel> for WarnLogEntry {
    type Error = DomainError;

    fn try_from(model: WarnLogModel) -> Result<Self, Self::Error> {
        let offender_chat_id = ChatId::parse(&model.offender_chat_id)
            .map_err(|e| corrupt_row("warn_logs", model.id, e))?;

        Ok(WarnLogEntry {
            id: model.id,
            owner_id: UserId::new(model.user_id),
            group_id: GroupId::new(model.group_id),
            offender_chat_id,
            warn_count: model.warn_count,
            warn_reason: model.warn_reason,
            last_warned_at: model.last_warned_at,
        })
    }
}

#[async_trait]
impl WarnLogRepository for PgWarnLogRepository {
    /// Single-statement upsert; the unique triple serializes concurrent warnings
    #[instrument(skip(self))]
    async fn increment(&self, record: &WarnRecord) -> RepoResult<i32> {
        let count = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO warn_logs (user_id, group_id, offender_chat_id, warn_count, warn_reason, last_warned_at, created_at, updated_at)
            VALUES ($1, $2, $3, 1, $4, NOW(), NOW(), NOW())
            ON CONFLICT (user_id, group_id, offender_chat_id) DO UPDATE SET
                warn_count = warn_logs.warn_count + 1,
                warn_reason = COALESCE(EXCLUDED.warn_reason, warn_logs.warn_reason),
                last_warned_at = NOW(),
                updated_at = NOW()
            RETURNING warn_count
            ",
        )
        .bind(record.owner_id.into_inner())
        .bind(record.group_id.into_inner())
        .bind(record.offender_chat_id.as_str())
        .bind(&record.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        owner_id: UserId,
        group_id: GroupId,
        offender_chat_id: &ChatId,
    ) -> RepoResult<Option<WarnLogEntry>> {
        let model = sqlx::query_as::<_, WarnLogModel>(
            r"
            SELECT id, user_id, group_id, offender_chat_id, warn_count, warn_reason, last_warned_at
            FROM warn_logs
            WHERE user_id = $1 AND group_id = $2 AND offender_chat_id = $3
            ",
        )
        .bind(owner_id.into_inner())
        .bind(group_id.into_inner())
        .bind(offender_chat_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(WarnLogEntry::try_from).transpose()
    }
}

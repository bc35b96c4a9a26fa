//! Warn log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for warn_logs table
#[derive(Debug, Clone, FromRow)]
pub struct WarnLogModel {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
    pub offender_chat_id: String,
    pub warn_count: i32,
    pub warn_reason: Option<String>,
    pub last_warned_at: DateTime<Utc>,
}

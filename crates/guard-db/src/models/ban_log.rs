//! Ban log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for ban_logs table
#[derive(Debug, Clone, FromRow)]
pub struct BanLogModel {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
    pub offender_chat_id: String,
    pub action: String,
    pub reason: Option<String>,
    pub banned_at: DateTime<Utc>,
}

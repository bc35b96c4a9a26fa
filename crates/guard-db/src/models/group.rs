//! Group database model

use sqlx::FromRow;

/// Database model for telegram_groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub telegram_bot_id: i64,
}

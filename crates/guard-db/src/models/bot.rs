//! Bot database model

use sqlx::FromRow;

/// Database model for telegram_bots table
#[derive(Clone, FromRow)]
pub struct BotModel {
    pub id: i64,
    pub user_id: i64,
    pub bot_token: String,
}

// The token must never reach logs
impl std::fmt::Debug for BotModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotModel")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

//! Bot entity - a Telegram bot registered by a dashboard user

use crate::value_objects::{BotId, BotToken, UserId};

/// Registered bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub id: BotId,
    pub owner_id: UserId,
    pub token: BotToken,
}

impl Bot {
    pub fn new(id: BotId, owner_id: UserId, token: BotToken) -> Self {
        Self { id, owner_id, token }
    }

    /// Check if a user owns this bot
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

//! Group entity - a Telegram group managed through one of the owner's bots

use crate::value_objects::{BotId, ChatId, GroupId};

/// Managed group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub bot_id: BotId,
}

impl Group {
    pub fn new(id: GroupId, bot_id: BotId) -> Self {
        Self { id, bot_id }
    }

    /// Chat id to address this group through the Bot API
    pub fn chat_id(&self) -> ChatId {
        ChatId::from(self.id.into_inner())
    }
}

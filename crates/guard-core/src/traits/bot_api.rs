//! Bot API port - the remote messaging client
//!
//! Implementations are stateless: the credential travels with every call.
//! Every method returns the raw response body, whatever the HTTP status, since
//! the Bot API reports failures inside the JSON (`"ok": false`). Only transport
//! failures surface as errors.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DomainError;
use crate::value_objects::{BotToken, ChatId};

/// Result type for Bot API calls
pub type RemoteResult<T> = Result<T, DomainError>;

/// Chat member moderation methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberMethod {
    Ban,
    Unban,
}

impl MemberMethod {
    /// Bot API method name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ban => "banChatMember",
            Self::Unban => "unbanChatMember",
        }
    }
}

/// `sendMessage` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

#[async_trait]
pub trait BotApi: Send + Sync {
    /// Ban or unban `user` in `chat`
    async fn member_action(
        &self,
        token: &BotToken,
        method: MemberMethod,
        chat: &ChatId,
        user: &ChatId,
    ) -> RemoteResult<String>;

    /// Send a text message
    async fn send_message(&self, token: &BotToken, message: &OutgoingMessage)
        -> RemoteResult<String>;
}

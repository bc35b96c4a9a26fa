//! Value objects - immutable types that represent domain concepts

mod bot_token;
mod chat_id;
mod ids;
mod moderation_action;
mod remote_response;

pub use bot_token::BotToken;
pub use chat_id::{ChatId, ChatIdParseError};
pub use ids::{BotId, GroupId, UserId};
pub use moderation_action::{ModerationAction, UnknownAction};
pub use remote_response::RemoteResponse;

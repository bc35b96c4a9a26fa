//! # guard-core
//!
//! Domain layer for Telegram group moderation: entities, value objects,
//! repository ports and the bot API port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{BanLogEntry, Bot, Group, WarnLogEntry};
pub use error::DomainError;
pub use traits::{
    BanLogRepository, BotApi, BotRepository, GroupRepository, MemberMethod, NewBanLog,
    OutgoingMessage, RemoteResult, RepoResult, WarnLogRepository, WarnRecord,
};
pub use value_objects::{
    BotId, BotToken, ChatId, ChatIdParseError, GroupId, ModerationAction, RemoteResponse,
    UnknownAction, UserId,
};

//! Ports - interfaces the domain needs from infrastructure

mod bot_api;
mod repositories;

pub use bot_api::{BotApi, MemberMethod, OutgoingMessage, RemoteResult};
pub use repositories::{
    BanLogRepository, BotRepository, GroupRepository, NewBanLog, RepoResult, WarnLogRepository,
    WarnRecord,
};

//! Database models - SQLx-compatible structs for PostgreSQL tables

mod ban_log;
mod bot;
mod group;
mod warn_log;

pub use ban_log::BanLogModel;
pub use bot::BotModel;
pub use group::GroupModel;
pub use warn_log::WarnLogModel;

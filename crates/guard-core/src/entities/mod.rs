//! Domain entities - managed groups, their bots, and the moderation audit logs

mod ban_log;
mod bot;
mod group;
mod warn_log;

pub use ban_log::BanLogEntry;
pub use bot::Bot;
pub use group::Group;
pub use warn_log::WarnLogEntry;

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in guard-core.

mod ban_log;
mod bot;
mod error;
mod group;
mod warn_log;

pub use ban_log::PgBanLogRepository;
pub use bot::PgBotRepository;
pub use group::PgGroupRepository;
pub use warn_log::PgWarnLogRepository;

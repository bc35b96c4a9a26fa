//! Ban log entry - one row per ban or kick, never updated

use chrono::{DateTime, Utc};

use crate::value_objects::{ChatId, GroupId, ModerationAction, UserId};

/// Append-only record of a ban or kick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanLogEntry {
    pub id: i64,
    pub owner_id: UserId,
    pub group_id: GroupId,
    pub offender_chat_id: ChatId,
    pub action: ModerationAction,
    pub reason: Option<String>,
    pub banned_at: DateTime<Utc>,
}

//! Warn log entry - cumulative warning counter per offender

use chrono::{DateTime, Utc};

use crate::value_objects::{ChatId, GroupId, UserId};

/// Warning counter, unique per (owner, group, offender)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarnLogEntry {
    pub id: i64,
    pub owner_id: UserId,
    pub group_id: GroupId,
    pub offender_chat_id: ChatId,
    pub warn_count: i32,
    pub warn_reason: Option<String>,
    pub last_warned_at: DateTime<Utc>,
}

impl WarnLogEntry {
    /// Apply one more warning in place
    ///
    /// The stored reason survives when `reason` is `None`.
    pub fn record_warning(&mut self, reason: Option<String>, at: DateTime<Utc>) -> i32 {
        self.warn_count += 1;
        if reason.is_some() {
            self.warn_reason = reason;
        }
        self.last_warned_at = at;
        self.warn_count
    }
}

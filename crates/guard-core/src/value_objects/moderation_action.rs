//! Moderation action - what happened to an offender

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ban or kick
///
/// A kick is a ban immediately lifted, so the user can rejoin later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Ban,
    Kick,
}

impl ModerationAction {
    /// Stored and wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Kick => "kick",
        }
    }

    /// Whether the ban must be lifted right after it is applied
    #[inline]
    pub const fn lifts_ban(self) -> bool {
        matches!(self, Self::Kick)
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a ModerationAction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown moderation action: {0}")]
pub struct UnknownAction(pub String);

impl std::str::FromStr for ModerationAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ban" => Ok(Self::Ban),
            "kick" => Ok(Self::Kick),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

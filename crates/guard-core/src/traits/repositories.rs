//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{BanLogEntry, Bot, Group, WarnLogEntry};
use crate::error::DomainError;
use crate::value_objects::{BotId, ChatId, GroupId, ModerationAction, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by ID
    async fn find_by_id(&self, id: GroupId) -> RepoResult<Option<Group>>;
}

// ============================================================================
// Bot Repository
// ============================================================================

#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Find a bot only if it belongs to the given owner
    async fn find_owned(&self, id: BotId, owner_id: UserId) -> RepoResult<Option<Bot>>;
}

// ============================================================================
// Ban Log Repository
// ============================================================================

/// Values for a new ban log row
#[derive(Debug, Clone)]
pub struct NewBanLog {
    pub owner_id: UserId,
    pub group_id: GroupId,
    pub offender_chat_id: ChatId,
    pub action: ModerationAction,
    pub reason: Option<String>,
}

#[async_trait]
pub trait BanLogRepository: Send + Sync {
    /// Append a ban log row
    async fn create(&self, entry: &NewBanLog) -> RepoResult<BanLogEntry>;

    /// List ban log rows for a group, newest first
    async fn find_by_group(&self, owner_id: UserId, group_id: GroupId)
        -> RepoResult<Vec<BanLogEntry>>;
}

// ============================================================================
// Warn Log Repository
// ============================================================================

/// One warning against an offender
#[derive(Debug, Clone)]
pub struct WarnRecord {
    pub owner_id: UserId,
    pub group_id: GroupId,
    pub offender_chat_id: ChatId,
    /// New reason; `None` keeps the stored one
    pub reason: Option<String>,
}

#[async_trait]
pub trait WarnLogRepository: Send + Sync {
    /// Insert the counter at 1 or increment it, atomically, returning the new count
    async fn increment(&self, record: &WarnRecord) -> RepoResult<i32>;

    /// Find the counter for an (owner, group, offender) triple
    async fn find(
        &self,
        owner_id: UserId,
        group_id: GroupId,
        offender_chat_id: &ChatId,
    ) -> RepoResult<Option<WarnLogEntry>>;
}

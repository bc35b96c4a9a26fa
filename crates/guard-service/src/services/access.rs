//! Group access resolution
//!
//! A caller may act on a group only through a bot they own.

use guard_core::entities::{Bot, Group};
use guard_core::error::DomainError;
use guard_core::value_objects::{GroupId, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A group together with the caller's bot that manages it
#[derive(Debug, Clone)]
pub struct ManagedGroup {
    pub group: Group,
    pub bot: Bot,
}

/// Access service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a group and the caller-owned bot behind it
    ///
    /// # Errors
    /// `GroupNotFound` if the group is unknown, `BotNotFound` if its bot
    /// is missing or belongs to someone else.
    #[instrument(skip(self))]
    pub async fn resolve(&self, caller: UserId, group_id: GroupId) -> ServiceResult<ManagedGroup> {
        let group = self
            .ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;

        let bot = self
            .ctx
            .bot_repo()
            .find_owned(group.bot_id, caller)
            .await?
            .ok_or(DomainError::BotNotFound(group.bot_id))?;

        debug!(bot_id = %bot.id, "Resolved managing bot");
        Ok(ManagedGroup { group, bot })
    }
}

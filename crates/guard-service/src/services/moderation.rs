//! Moderation service
//!
//! Bans and kicks chat members through the Bot API and appends each action
//! to the ban log.

use guard_core::entities::BanLogEntry;
use guard_core::traits::{MemberMethod, NewBanLog, RemoteResult};
use guard_core::value_objects::{
    BotToken, ChatId, GroupId, ModerationAction, RemoteResponse, UserId,
};
use tracing::{debug, info, instrument, warn};

use crate::dto::{ModerationRequest, ModerationResponse};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Inputs for a single ban or kick
#[derive(Debug, Clone)]
pub struct BanOrKick {
    pub action: ModerationAction,
    pub token: BotToken,
    /// Chat the offender is removed from
    pub group_chat_id: ChatId,
    pub offender: ChatId,
    pub reason: Option<String>,
    /// Dashboard user the log row is attributed to
    pub owner_id: Option<UserId>,
}

/// Turn a raw Bot API result into a response, treating transport errors as empty
pub(crate) fn interpret(method: &str, result: RemoteResult<String>) -> RemoteResponse {
    match result {
        Ok(body) => RemoteResponse::parse(&body),
        Err(e) => {
            warn!(method, error = %e, "Bot API call failed");
            RemoteResponse::empty()
        }
    }
}

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Ban or kick a member and log it
    ///
    /// A kick is a ban immediately followed by an unban, so the member may
    /// rejoin. Only the ban reply is returned. The log row is written when an
    /// owner is known (`cmd.owner_id`, else `caller`) and the group id is
    /// numeric; the Bot API outcome does not affect logging.
    #[instrument(skip(self, cmd), fields(action = %cmd.action, group = %cmd.group_chat_id, offender = %cmd.offender))]
    pub async fn ban_or_kick(
        &self,
        cmd: BanOrKick,
        caller: Option<UserId>,
    ) -> ServiceResult<RemoteResponse> {
        let api = self.ctx.bot_api();

        let ban = api
            .member_action(&cmd.token, MemberMethod::Ban, &cmd.group_chat_id, &cmd.offender)
            .await;
        let response = interpret(MemberMethod::Ban.as_str(), ban);

        if cmd.action.lifts_ban() {
            let unban = api
                .member_action(&cmd.token, MemberMethod::Unban, &cmd.group_chat_id, &cmd.offender)
                .await;
            let unban = interpret(MemberMethod::Unban.as_str(), unban);
            debug!(ok = unban.is_ok(), "Unban after kick");
        }

        match (cmd.owner_id.or(caller), cmd.group_chat_id.as_i64()) {
            (Some(owner_id), Some(group_id)) => {
                self.log_ban(NewBanLog {
                    owner_id,
                    group_id: GroupId::new(group_id),
                    offender_chat_id: cmd.offender,
                    action: cmd.action,
                    reason: cmd.reason,
                })
                .await?;
            }
            (None, _) => debug!("No owner, ban log skipped"),
            (_, None) => warn!("Group id is not numeric, ban log skipped"),
        }

        Ok(response)
    }

    /// Append a ban log row
    #[instrument(skip(self))]
    pub async fn log_ban(&self, entry: NewBanLog) -> ServiceResult<BanLogEntry> {
        let logged = self.ctx.ban_log_repo().create(&entry).await?;
        info!(log_id = logged.id, action = %logged.action, "Ban logged");
        Ok(logged)
    }

    /// Handle a ban or kick request from the HTTP surface
    ///
    /// # Errors
    /// Not-found errors when the group or the caller's bot cannot be resolved;
    /// database errors from the log write.
    #[instrument(skip(self, request))]
    pub async fn moderate(
        &self,
        caller: UserId,
        action: ModerationAction,
        request: ModerationRequest,
    ) -> ServiceResult<ModerationResponse> {
        let managed = AccessService::new(self.ctx)
            .resolve(caller, GroupId::new(request.telegram_group_id))
            .await?;

        let cmd = BanOrKick {
            action,
            token: managed.bot.token,
            group_chat_id: managed.group.chat_id(),
            offender: request.chat_id,
            reason: normalize_reason(request.reason),
            owner_id: Some(caller),
        };
        let response = self.ban_or_kick(cmd, Some(caller)).await?;

        let (success, fallback) = match action {
            ModerationAction::Ban => ("Member banned", "Unable to ban member"),
            ModerationAction::Kick => ("Member kicked", "Unable to kick member"),
        };
        Ok(ModerationResponse::from_remote(response, success, fallback))
    }
}

/// Blank reasons are treated as absent
pub(crate) fn normalize_reason(reason: Option<String>) -> Option<String> {
    reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
}

//! Warning service
//!
//! Sends warning messages to group members and keeps a per-offender
//! warning counter.

use guard_core::traits::{OutgoingMessage, WarnRecord};
use guard_core::value_objects::{BotToken, ChatId, GroupId, RemoteResponse, UserId};
use tracing::{info, instrument};

use crate::dto::{ModerationResponse, WarnRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::markup::strip_markup;
use super::moderation::{interpret, normalize_reason};

/// Warning service
pub struct WarningService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WarningService<'a> {
    /// Create a new WarningService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Handle a warn request from the HTTP surface
    ///
    /// The counter is only bumped when the Bot API accepted the message.
    #[instrument(skip(self, request), fields(group = request.telegram_group_id, offender = %request.chat_id))]
    pub async fn warn(&self, caller: UserId, request: WarnRequest) -> ServiceResult<ModerationResponse> {
        let managed = AccessService::new(self.ctx)
            .resolve(caller, GroupId::new(request.telegram_group_id))
            .await?;

        let response = self
            .send_warning(
                &managed.bot.token,
                &request.chat_id,
                &request.message,
                request.reply_to_message_id,
            )
            .await;

        if !response.is_ok() {
            return Ok(ModerationResponse::from_remote(
                response,
                "Warning sent",
                "Unable to send warning",
            ));
        }

        let warn_count = self
            .increment_warning(caller, managed.group.id, request.chat_id, request.reason)
            .await?;

        Ok(ModerationResponse::from_remote(response, "Warning sent", "Unable to send warning")
            .with_warn_count(warn_count))
    }

    /// Send a warning message with a given bot
    ///
    /// Markup is stripped from `message`. Usable without an HTTP request.
    #[instrument(skip(self, token, message))]
    pub async fn send_warning(
        &self,
        token: &BotToken,
        chat_id: &ChatId,
        message: &str,
        reply_to_message_id: Option<i64>,
    ) -> RemoteResponse {
        let outgoing = OutgoingMessage {
            chat_id: chat_id.clone(),
            text: strip_markup(message),
            reply_to_message_id: reply_to_message_id.filter(|id| *id != 0),
        };

        let result = self.ctx.bot_api().send_message(token, &outgoing).await;
        interpret("sendMessage", result)
    }

    /// Record one more warning against an offender, returning the new count
    ///
    /// A blank or missing reason leaves the stored reason in place.
    #[instrument(skip(self))]
    pub async fn increment_warning(
        &self,
        owner_id: UserId,
        group_id: GroupId,
        offender_chat_id: ChatId,
        reason: Option<String>,
    ) -> ServiceResult<i32> {
        let record = WarnRecord {
            owner_id,
            group_id,
            offender_chat_id,
            reason: normalize_reason(reason),
        };

        let count = self.ctx.warn_log_repo().increment(&record).await?;
        info!(warn_count = count, "Warning recorded");
        Ok(count)
    }
}

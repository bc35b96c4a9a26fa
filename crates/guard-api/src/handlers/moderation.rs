//! Moderation handlers
//!
//! Endpoints for warning, banning and kicking group members.

use axum::{extract::State, http::StatusCode, Json};
use guard_core::ModerationAction;
use guard_service::{
    ModerationRequest, ModerationResponse, ModerationService, WarnRequest, WarningService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

type ModerationReply = (StatusCode, Json<ModerationResponse>);

/// A Bot API rejection is reported as 400 with the same envelope
fn reply(response: ModerationResponse) -> ModerationReply {
    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

/// Send a warning to a group member
///
/// POST /warn
pub async fn warn_member(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<WarnRequest>,
) -> ApiResult<ModerationReply> {
    let service = WarningService::new(state.service_context());
    let response = service.warn(auth.user_id, request).await?;
    Ok(reply(response))
}

/// Ban a group member
///
/// POST /ban
pub async fn ban_member(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ModerationRequest>,
) -> ApiResult<ModerationReply> {
    let service = ModerationService::new(state.service_context());
    let response = service
        .moderate(auth.user_id, ModerationAction::Ban, request)
        .await?;
    Ok(reply(response))
}

/// Kick a group member (ban, then lift the ban so they may rejoin)
///
/// POST /kick
pub async fn kick_member(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ModerationRequest>,
) -> ApiResult<ModerationReply> {
    let service = ModerationService::new(state.service_context());
    let response = service
        .moderate(auth.user_id, ModerationAction::Kick, request)
        .await?;
    Ok(reply(response))
}

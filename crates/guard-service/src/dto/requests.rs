//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! `chat_id` accepts a JSON string or integer and is checked while deserializing.

use guard_core::value_objects::ChatId;
use serde::Deserialize;
use validator::Validate;

/// Warn a group member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WarnRequest {
    pub telegram_group_id: i64,

    /// Offender to address the warning to
    pub chat_id: ChatId,

    #[validate(length(min = 1, max = 500, message = "Message must be 1-500 characters"))]
    pub message: String,

    /// Message to reply to in the group
    #[serde(default)]
    pub reply_to_message_id: Option<i64>,

    #[validate(length(max = 255, message = "Reason must be at most 255 characters"))]
    #[serde(default)]
    pub reason: Option<String>,
}

/// Ban or kick a group member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModerationRequest {
    pub telegram_group_id: i64,

    /// Member to remove
    pub chat_id: ChatId,

    #[validate(length(max = 255, message = "Reason must be at most 255 characters"))]
    #[serde(default)]
    pub reason: Option<String>,
}

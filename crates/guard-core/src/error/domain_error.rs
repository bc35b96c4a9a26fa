//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BotId, GroupId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Group not found")]
    GroupNotFound(GroupId),

    #[error("Bot not found for this group")]
    BotNotFound(BotId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Bot API unreachable: {0}")]
    RemoteUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GroupNotFound(_) => "UNKNOWN_GROUP",
            Self::BotNotFound(_) => "UNKNOWN_BOT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidChatId(_) => "INVALID_CHAT_ID",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::RemoteUnavailable(_) => "REMOTE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GroupNotFound(_) | Self::BotNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidChatId(_) | Self::ContentTooLong { .. }
        )
    }
}

impl From<crate::value_objects::ChatIdParseError> for DomainError {
    fn from(err: crate::value_objects::ChatIdParseError) -> Self {
        Self::InvalidChatId(err.to_string())
    }
}

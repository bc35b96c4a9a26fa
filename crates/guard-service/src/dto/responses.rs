//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use guard_core::value_objects::RemoteResponse;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Moderation Responses
// ============================================================================

/// Outcome of a ban, kick or warning
///
/// `data` carries the Bot API reply untouched.
#[derive(Debug, Clone, Serialize)]
pub struct ModerationResponse {
    pub error: bool,
    pub message: String,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_count: Option<i32>,
}

impl ModerationResponse {
    /// Build from a Bot API reply
    ///
    /// The message is `success` when the reply is ok, otherwise the reply's
    /// description, otherwise `fallback`.
    pub fn from_remote(remote: RemoteResponse, success: &str, fallback: &str) -> Self {
        let ok = remote.is_ok();
        let message = if ok {
            success.to_string()
        } else {
            remote.description().unwrap_or(fallback).to_string()
        };

        Self {
            error: !ok,
            message,
            data: remote.into_value(),
            warn_count: None,
        }
    }

    pub fn with_warn_count(mut self, count: i32) -> Self {
        self.warn_count = Some(count);
        self
    }

    pub fn is_success(&self) -> bool {
        !self.error
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::{ModerationRequest, WarnRequest};
pub use responses::{HealthChecks, HealthResponse, ModerationResponse, ReadinessResponse};

//! Integration test utilities for the moderation service
//!
//! End-to-end tests run the real router over in-memory repositories and a
//! recording Bot API, so they need neither PostgreSQL nor Telegram.

pub mod fixtures;
pub mod helpers;

pub use fakes::*;
pub use fixtures::*;
pub use helpers::*;

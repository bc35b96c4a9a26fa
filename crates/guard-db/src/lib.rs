//! # guard-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations for groups, bots, ban logs and warn logs
//!
//! The expected schema ships as `schema.sql` at the crate root.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guard_db::{create_pool, DatabaseConfig, PgWarnLogRepository};
//! use guard_core::traits::WarnLogRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let warn_logs = PgWarnLogRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, ping, DatabaseConfig, PgPool};
pub use repositories::{
    PgBanLogRepository, PgBotRepository, PgGroupRepository, PgWarnLogRepository,
};

/// Reference DDL for the tables the repositories expect
pub const SCHEMA_SQL: &str = include_str!("../schema.sql");

//! Error handling utilities for repositories

use guard_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// A stored row that no longer fits the domain types
pub fn corrupt_row(table: &str, id: i64, detail: impl std::fmt::Display) -> DomainError {
    DomainError::DatabaseError(format!("{table} row {id}: {detail}"))
}

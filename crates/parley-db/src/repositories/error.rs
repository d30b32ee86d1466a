//! Error handling utilities for repositories

use parley_core::DomainError;
use sqlx::Error as SqlxError;
use std::fmt::Debug;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Convert a failed write to DomainError, embedding the offending payload
/// for diagnostics
pub fn map_write_error(e: SqlxError, payload: &impl Debug) -> DomainError {
    DomainError::Database(format!("{e} (payload: {payload:?})"))
}

/// Check whether the error is a unique-constraint violation
pub fn is_unique_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

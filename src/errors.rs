//! Unified error types for `GymDesk`.
//!
//! Validation failures (enum, reference, invariant, transition, time-range)
//! are recoverable and carry enough context to render field-level feedback.
//! `Database` wraps an external store failure with its opaque cause. Nothing
//! here is fatal to the process; every failure is scoped to the command that
//! produced it.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value '{value}' for {field}, expected one of {expected:?}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("{field} references missing record with id {id}")]
    DanglingReference { field: &'static str, id: i64 },

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("invalid status transition from '{from}' to '{to}'")]
    InvalidStatusTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("check-out {check_out} is earlier than check-in {check_in}")]
    InvalidTimeRange {
        check_in: NaiveTime,
        check_out: NaiveTime,
    },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: String, id: i64 },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("external store error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

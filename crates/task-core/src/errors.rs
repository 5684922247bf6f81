//! Cross-cutting error types for task-cli.
//!
//! Storage errors (`DatabaseError`) live in `task-db` and configuration errors
//! in `task-config`. The CLI folds all of them into `anyhow` at the edge.

use thiserror::Error;

/// Errors raised while building domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (length, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected one of: todo, in-progress, done")]
pub struct ParseStatusError(pub String);

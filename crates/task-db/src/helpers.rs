//! Row-to-entity parsing helpers.
//!
//! The SQL backend stores every non-integer column as TEXT. These helpers
//! turn those strings back into typed values and handle the dual datetime
//! format issue (`SQLite`'s `CURRENT_TIMESTAMP` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, NaiveDate, Utc};
use task_core::enums::TaskStatus;
use task_core::ids::TaskId;

use crate::error::DatabaseError;

/// Text form of due dates in both backends.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse an optional `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a calendar date.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Parse a TEXT status column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the value is not a known status.
pub fn parse_status(s: &str) -> Result<TaskStatus, DatabaseError> {
    s.parse()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse status: {e}")))
}

/// Convert a task id to the signed integer SQLite stores.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for ids beyond `i64::MAX`.
pub fn id_to_sql(id: TaskId) -> Result<i64, DatabaseError> {
    i64::try_from(id.value())
        .map_err(|_| DatabaseError::InvalidState(format!("task id {id} exceeds SQLite range")))
}

/// Convert a stored INTEGER primary key back to a task id.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for non-positive values.
pub fn id_from_sql(raw: i64) -> Result<TaskId, DatabaseError> {
    u64::try_from(raw)
        .ok()
        .filter(|value| *value > 0)
        .map(TaskId::new)
        .ok_or_else(|| DatabaseError::InvalidState(format!("invalid stored task id {raw}")))
}

use chrono::NaiveDate;
use task_core::enums::TaskStatus;

use crate::error::CommandError;

/// Literal that clears a due date.
pub const CLEAR_DUE_DATE: &str = "-";
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `list` status filter.
pub fn parse_status(raw: &str) -> Result<TaskStatus, CommandError> {
    raw.parse::<TaskStatus>()
        .map_err(|error| CommandError::Validation(error.to_string()))
}

/// Parse a `due` argument: `-` clears, anything else must be `YYYY-MM-DD`.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, CommandError> {
    let raw = raw.trim();
    if raw == CLEAR_DUE_DATE {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| CommandError::Validation("Invalid date format. Use YYYY-MM-DD.".to_string()))
}

/// Reject blank descriptions before they reach validation.
pub fn require_description(raw: &str) -> Result<&str, CommandError> {
    if raw.trim().is_empty() {
        return Err(CommandError::Validation(
            "Description must not be empty.".to_string(),
        ));
    }
    Ok(raw)
}

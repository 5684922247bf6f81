use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::TaskStatus;
use crate::ids::{Description, TaskId};

const RULE_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 16;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single to-do record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub description: Description,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first mutation after creation.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether the task has been mutated since it was created.
    #[must_use]
    pub const fn was_updated(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// Record card used by the default CLI output.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        let due = self
            .due_date
            .map_or_else(|| String::from("None"), |date| date.format("%Y-%m-%d").to_string());
        let updated = self.updated_at.map_or_else(
            || String::from("Never"),
            |at| at.format(TIMESTAMP_FORMAT).to_string(),
        );

        writeln!(f, "{rule}")?;
        write_field(f, "ID:", &self.id.to_string())?;
        write_field(f, "Status:", &self.status.as_str().to_uppercase())?;
        write_field(f, "Description:", self.description.as_str())?;
        write_field(f, "Due date:", &due)?;
        write_field(
            f,
            "Created at:",
            &self.created_at.format(TIMESTAMP_FORMAT).to_string(),
        )?;
        write_field(f, "Updated at:", &updated)?;
        write!(f, "{rule}")
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    let label = format!("| {label}");
    writeln!(f, "{label:<LABEL_WIDTH$}{value}")
}

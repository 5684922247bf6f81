//! Identifier and validated scalar types.

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::validation::{MAX_DESCRIPTION_LEN, is_valid_description};

/// Backend-assigned task identifier.
///
/// Identifiers start at 1 and are never reused within one store.
/// Deserialization rejects 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` past `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl TryFrom<u64> for TaskId {
    type Error = CoreError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(CoreError::Validation(
                "invalid task id '0': ids start at 1".to_string(),
            ));
        }
        Ok(Self(value))
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl JsonSchema for TaskId {
    fn schema_name() -> Cow<'static, str> {
        "TaskId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1
        })
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let raw = value
            .trim()
            .parse::<u64>()
            .map_err(|e| CoreError::Validation(format!("invalid task id '{value}': {e}")))?;
        Self::try_from(raw).map_err(|_| {
            CoreError::Validation(format!("invalid task id '{value}': ids start at 1"))
        })
    }
}

/// Task description, at most [`MAX_DESCRIPTION_LEN`] characters.
///
/// Deserialization runs the same check as [`Description::new`], so a stored
/// record can never carry an over-long description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the value is longer than
    /// [`MAX_DESCRIPTION_LEN`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        if !is_valid_description(&value) {
            return Err(CoreError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_LEN} characters (got {})",
                value.chars().count()
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl JsonSchema for Description {
    fn schema_name() -> Cow<'static, str> {
        "Description".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "maxLength": MAX_DESCRIPTION_LEN
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_parses_and_displays() {
        let id: TaskId = "42".parse().unwrap();
        assert_eq!(id, TaskId::new(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.next(), Some(TaskId::new(43)));
    }

    #[test]
    fn task_id_rejects_non_numeric() {
        let err = "abc".parse::<TaskId>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("invalid task id 'abc'")));
    }

    #[test]
    fn task_id_next_stops_at_max() {
        assert_eq!(TaskId::new(u64::MAX).next(), None);
    }

    #[test]
    fn task_id_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<TaskId>("0").is_err());
        assert_eq!(serde_json::from_str::<TaskId>("7").unwrap(), TaskId::new(7));
        assert_eq!(serde_json::to_string(&TaskId::new(7)).unwrap(), "7");
    }

    #[test]
    fn task_id_rejects_zero() {
        assert!("0".parse::<TaskId>().is_err());
        assert_eq!(" 1 ".parse::<TaskId>().unwrap(), TaskId::new(1));
    }

    #[test]
    fn description_rejects_over_limit() {
        let err = Description::new("x".repeat(MAX_DESCRIPTION_LEN + 1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg.contains("at most 255")));
    }

    #[test]
    fn description_deserialization_is_validated() {
        let ok: Description = serde_json::from_str("\"Write report\"").unwrap();
        assert_eq!(ok.as_str(), "Write report");

        let too_long = format!("\"{}\"", "x".repeat(MAX_DESCRIPTION_LEN + 1));
        assert!(serde_json::from_str::<Description>(&too_long).is_err());
    }

    #[test]
    fn description_serializes_as_plain_string() {
        let description = Description::new("Buy milk").unwrap();
        assert_eq!(serde_json::to_string(&description).unwrap(), "\"Buy milk\"");
    }
}

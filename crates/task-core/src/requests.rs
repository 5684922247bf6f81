//! Create and partial-update request types.
//!
//! `UpdateTask` carries only the fields a caller supplied. Backends apply
//! exactly those fields; the SQL backend turns each one into a SET clause.

use chrono::NaiveDate;

use crate::enums::TaskStatus;
use crate::errors::CoreError;
use crate::ids::Description;

/// Three-state update for a nullable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Field was not mentioned; leave the stored value alone.
    #[default]
    Keep,
    /// Field was explicitly set to null.
    Clear,
    /// Field was set to a new value.
    Set(T),
}

impl<T> Patch<T> {
    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Builds a patch from an optional value: `None` clears, `Some` sets.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }

    /// The value to store, or `None` when the patch leaves the field alone.
    ///
    /// `Some(None)` means "store null".
    #[must_use]
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Self::Keep => None,
            Self::Clear => Some(None),
            Self::Set(value) => Some(Some(value)),
        }
    }

    /// Applies the patch to a stored optional value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *target = None,
            Self::Set(value) => *target = Some(value),
        }
    }
}

// ---------------------------------------------------------------------------
// CreateTask
// ---------------------------------------------------------------------------

/// Request to create a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub description: Description,
    pub status: TaskStatus,
}

impl CreateTask {
    /// Builds a validated create request.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is too long.
    pub fn new(description: impl Into<String>, status: TaskStatus) -> Result<Self, CoreError> {
        Ok(Self {
            description: Description::new(description)?,
            status,
        })
    }
}

// ---------------------------------------------------------------------------
// UpdateTask
// ---------------------------------------------------------------------------

/// Partial update; only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTask {
    pub status: Option<TaskStatus>,
    pub description: Option<Description>,
    pub due_date: Patch<NaiveDate>,
}

impl UpdateTask {
    /// `true` when no field was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.description.is_none() && self.due_date.is_keep()
    }
}

pub struct UpdateTaskBuilder(UpdateTask);

impl UpdateTaskBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(UpdateTask::default())
    }

    #[must_use]
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    /// Sets a new description.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the description is too long.
    pub fn description(mut self, description: impl Into<String>) -> Result<Self, CoreError> {
        self.0.description = Some(Description::new(description)?);
        Ok(self)
    }

    /// Sets (`Some`) or clears (`None`) the due date.
    #[must_use]
    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.0.due_date = Patch::from_option(due_date);
        self
    }

    #[must_use]
    pub fn build(self) -> UpdateTask {
        self.0
    }
}

impl Default for UpdateTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

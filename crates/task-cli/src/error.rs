//! User-facing command failures and their process exit codes.

use task_core::errors::CoreError;
use task_core::ids::TaskId;

/// Exit code for a successful command.
pub const EXIT_OK: i32 = 0;
/// Exit code for a failed operation or any unexpected error.
pub const EXIT_FAILED: i32 = 1;
/// Exit code clap uses for usage errors.
pub const EXIT_USAGE: i32 = 2;
/// Exit code when the requested task does not exist.
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code when input is rejected by validation.
pub const EXIT_VALIDATION: i32 = 4;

/// A failure whose message is shown to the user as-is.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    /// The standard message for an id that matched no task.
    #[must_use]
    pub fn task_not_found(id: TaskId) -> Self {
        Self::NotFound(format!("Task with id {id} was not found."))
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => EXIT_NOT_FOUND,
            Self::Validation(_) => EXIT_VALIDATION,
            Self::Failed(_) => EXIT_FAILED,
        }
    }
}

impl From<CoreError> for CommandError {
    fn from(error: CoreError) -> Self {
        let CoreError::Validation(message) = error;
        Self::Validation(message)
    }
}

/// Exit code for any error returned by a command handler.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CommandError>()
        .map_or(EXIT_FAILED, CommandError::exit_code)
}

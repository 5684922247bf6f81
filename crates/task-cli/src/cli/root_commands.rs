use clap::Subcommand;
use task_core::ids::TaskId;

/// Top-level subcommands for the `task-cli` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List tasks, optionally filtered by status.
    List {
        /// Status filter: todo, in-progress or done.
        status: Option<String>,
    },
    /// Add a new task.
    Add {
        /// Description of the task.
        description: String,
    },
    /// Replace the description of a task.
    Update {
        /// ID of the task.
        id: TaskId,
        /// New description.
        description: String,
    },
    /// Delete a task.
    Delete {
        /// ID of the task.
        id: TaskId,
    },
    /// Set a due date for a task.
    Due {
        /// ID of the task.
        id: TaskId,
        /// Due date (YYYY-MM-DD) or '-' to remove the current due date.
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Mark task as "todo".
    MarkTodo {
        /// ID of the task.
        id: TaskId,
    },
    /// Mark task as "in-progress".
    MarkInProgress {
        /// ID of the task.
        id: TaskId,
    },
    /// Mark task as "done".
    MarkDone {
        /// ID of the task.
        id: TaskId,
    },
}

//! Backend contract shared by the document and SQL stores.
//!
//! Stores persist exactly what they are given. Timestamps and validation
//! belong to [`TaskRepository`](crate::repository::TaskRepository).

use chrono::{DateTime, NaiveDate, Utc};
use task_core::entities::Task;
use task_core::enums::TaskStatus;
use task_core::ids::{Description, TaskId};
use task_core::requests::UpdateTask;

use crate::error::DatabaseError;

/// Fields of a task that does not have an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub description: Description,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl NewTask {
    /// Attaches the identifier the backend assigned.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            description: self.description,
            status: self.status,
            due_date: self.due_date,
            created_at: self.created_at,
            updated_at: None,
        }
    }
}

/// Persistence backend for tasks.
///
/// Every mutating call is durable when it returns `Ok`.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    /// Finds a task by id. `Ok(None)` when it does not exist.
    async fn get(&self, id: TaskId) -> Result<Option<Task>, DatabaseError>;

    /// Tasks whose status is in `statuses`, ascending by id.
    async fn list(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>, DatabaseError>;

    /// Stores a new task and returns the generated id.
    ///
    /// `Ok(None)` when the backend did not report an id.
    async fn insert(&mut self, task: NewTask) -> Result<Option<TaskId>, DatabaseError>;

    /// Applies the supplied fields of `update` and stamps `updated_at`.
    ///
    /// Returns `false` when the task does not exist or `update` is empty.
    async fn apply(
        &mut self,
        id: TaskId,
        update: &UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DatabaseError>;

    /// Removes a task. Returns whether anything was removed.
    async fn remove(&mut self, id: TaskId) -> Result<bool, DatabaseError>;

    /// Number of stored tasks, regardless of status.
    async fn count(&self) -> Result<usize, DatabaseError>;
}

//! Task repository: the only place that stamps timestamps and decides what
//! counts as a no-op.

use chrono::Utc;
use task_core::entities::Task;
use task_core::enums::TaskStatus;
use task_core::ids::TaskId;
use task_core::requests::{CreateTask, UpdateTask};

use crate::error::DatabaseError;
use crate::store::{NewTask, TaskStore};

/// Task operations over any [`TaskStore`].
#[derive(Debug)]
pub struct TaskRepository<S> {
    store: S,
}

impl<S: TaskStore> TaskRepository<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up a single task. A missing id is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend read fails.
    pub async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, DatabaseError> {
        self.store.get(id).await
    }

    /// Tasks whose status is one of `statuses`, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend read fails.
    pub async fn find_by_status(
        &self,
        statuses: &[TaskStatus],
    ) -> Result<Vec<Task>, DatabaseError> {
        self.store.list(statuses).await
    }

    /// Every task, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend read fails.
    pub async fn find_all(&self) -> Result<Vec<Task>, DatabaseError> {
        self.find_by_status(&TaskStatus::ALL).await
    }

    /// Store a new task and return it as persisted.
    ///
    /// `Ok(None)` means the backend did not report an identifier.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend write or re-read fails.
    pub async fn add(&mut self, request: CreateTask) -> Result<Option<Task>, DatabaseError> {
        let new_task = NewTask {
            description: request.description,
            status: request.status,
            due_date: None,
            created_at: Utc::now(),
        };

        let Some(id) = self.store.insert(new_task).await? else {
            tracing::warn!("backend did not return an id for the new task");
            return Ok(None);
        };
        self.store.get(id).await
    }

    /// Apply the supplied fields of `update` to `task`.
    ///
    /// Returns `false` for an empty update or when the task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend write fails.
    pub async fn update(&mut self, task: &Task, update: UpdateTask) -> Result<bool, DatabaseError> {
        if update.is_empty() {
            tracing::debug!(id = %task.id, "empty update, nothing to do");
            return Ok(false);
        }
        self.store.apply(task.id, &update, Utc::now()).await
    }

    /// Remove a task. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend write fails.
    pub async fn delete_by_id(&mut self, id: TaskId) -> Result<bool, DatabaseError> {
        self.store.remove(id).await
    }

    /// Number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend read fails.
    pub async fn size(&self) -> Result<usize, DatabaseError> {
        self.store.count().await
    }
}

//! Backend chosen at runtime from [`StorageConfig`].

use chrono::{DateTime, Utc};
use task_config::{Backend, StorageConfig};
use task_core::entities::Task;
use task_core::enums::TaskStatus;
use task_core::ids::TaskId;
use task_core::requests::UpdateTask;

use crate::document::DocumentStore;
use crate::error::DatabaseError;
use crate::sql::SqlStore;
use crate::store::{NewTask, TaskStore};

/// Either backend, selected by configuration.
#[derive(Debug)]
pub enum ConfiguredStore {
    Document(DocumentStore),
    Sql(SqlStore),
}

impl ConfiguredStore {
    /// Open the backend named by `config.backend` at its configured path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the backend cannot be opened.
    pub async fn open(config: &StorageConfig) -> Result<Self, DatabaseError> {
        let path = config.resolved_path().to_path_buf();
        tracing::debug!(backend = %config.backend, path = %path.display(), "opening task store");
        match config.backend {
            Backend::Json => Ok(Self::Document(DocumentStore::open(path)?)),
            Backend::Sqlite => Ok(Self::Sql(SqlStore::open(path).await?)),
        }
    }
}

impl TaskStore for ConfiguredStore {
    async fn get(&self, id: TaskId) -> Result<Option<Task>, DatabaseError> {
        match self {
            Self::Document(store) => store.get(id).await,
            Self::Sql(store) => store.get(id).await,
        }
    }

    async fn list(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>, DatabaseError> {
        match self {
            Self::Document(store) => store.list(statuses).await,
            Self::Sql(store) => store.list(statuses).await,
        }
    }

    async fn insert(&mut self, task: NewTask) -> Result<Option<TaskId>, DatabaseError> {
        match self {
            Self::Document(store) => store.insert(task).await,
            Self::Sql(store) => store.insert(task).await,
        }
    }

    async fn apply(
        &mut self,
        id: TaskId,
        update: &UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DatabaseError> {
        match self {
            Self::Document(store) => store.apply(id, update, updated_at).await,
            Self::Sql(store) => store.apply(id, update, updated_at).await,
        }
    }

    async fn remove(&mut self, id: TaskId) -> Result<bool, DatabaseError> {
        match self {
            Self::Document(store) => store.remove(id).await,
            Self::Sql(store) => store.remove(id).await,
        }
    }

    async fn count(&self) -> Result<usize, DatabaseError> {
        match self {
            Self::Document(store) => store.count().await,
            Self::Sql(store) => store.count().await,
        }
    }
}

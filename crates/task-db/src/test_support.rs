//! Shared test utilities for task-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use task_core::enums::TaskStatus;
    use task_core::requests::CreateTask;
    use tempfile::TempDir;

    use crate::document::DocumentStore;
    use crate::repository::TaskRepository;
    use crate::sql::SqlStore;

    /// Repository over a JSON document inside `dir`.
    pub fn document_repo(dir: &TempDir) -> TaskRepository<DocumentStore> {
        TaskRepository::new(DocumentStore::open(dir.path().join("tasks.json")).unwrap())
    }

    /// Repository over a libSQL file inside `dir`.
    ///
    /// `:memory:` is not usable here: every connection would see its own
    /// empty database.
    pub async fn sql_repo(dir: &TempDir) -> TaskRepository<SqlStore> {
        TaskRepository::new(SqlStore::open(dir.path().join("tasks.db")).await.unwrap())
    }

    /// A `todo` create request.
    pub fn create(description: &str) -> CreateTask {
        CreateTask::new(description, TaskStatus::Todo).unwrap()
    }
}

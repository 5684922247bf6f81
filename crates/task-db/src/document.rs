//! Document backend: the whole task list lives in memory and is written to a
//! JSON file after every mutation.
//!
//! File layout:
//!
//! ```json
//! {
//!     "next_id": 3,
//!     "tasks": [
//!         {
//!             "id": 1,
//!             "description": "Write report",
//!             "status": "todo",
//!             "due_date": "2025-06-01",
//!             "created_at": "2025-05-01T08:00:00Z",
//!             "updated_at": null
//!         }
//!     ]
//! }
//! ```
//!
//! The file is overwritten in place. There is no rename step, so a crash in
//! the middle of a write can leave a truncated file; the next open then resets
//! it to an empty document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use task_core::entities::Task;
use task_core::enums::TaskStatus;
use task_core::ids::TaskId;
use task_core::requests::UpdateTask;

use crate::error::DatabaseError;
use crate::store::{NewTask, TaskStore};

/// Serialized form of the document backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskDocument {
    /// Identifier handed to the next inserted task.
    pub next_id: TaskId,
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
}

impl Default for TaskDocument {
    fn default() -> Self {
        Self {
            next_id: TaskId::new(1),
            tasks: Vec::new(),
        }
    }
}

impl TaskDocument {
    /// Decode a document, repairing a `next_id` that would reuse an id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Json` when the bytes are not a valid document,
    /// and `DatabaseError::InvalidState` when the highest task id leaves no
    /// id to hand out.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatabaseError> {
        let mut document: Self = serde_json::from_slice(bytes)?;
        if let Some(max_id) = document.tasks.iter().map(|task| task.id).max()
            && document.next_id <= max_id
        {
            tracing::warn!(
                next_id = %document.next_id,
                %max_id,
                "document next_id would reuse an id; advancing it"
            );
            document.next_id = successor(max_id)?;
        }
        Ok(document)
    }

    /// Encode with four-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Json` if serialization fails.
    pub fn to_vec_pretty(&self) -> Result<Vec<u8>, DatabaseError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

fn successor(id: TaskId) -> Result<TaskId, DatabaseError> {
    id.next()
        .ok_or_else(|| DatabaseError::InvalidState(format!("task id {id} has no successor")))
}

/// JSON-file task store.
///
/// Mutations are staged on a copy of the document and only replace the
/// in-memory state once the file write succeeds.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    document: TaskDocument,
}

impl DocumentStore {
    /// Open the document at `path`.
    ///
    /// A missing file is created holding an empty document. A file that cannot
    /// be decoded is logged and reset to an empty document; its contents are
    /// lost.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file cannot be read or written.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating empty task document");
            return Self::reset(path);
        }

        let bytes = fs::read(&path)?;
        match TaskDocument::from_slice(&bytes) {
            Ok(document) => {
                tracing::debug!(
                    path = %path.display(),
                    tasks = document.tasks.len(),
                    "loaded task document"
                );
                Ok(Self { path, document })
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "task document is unreadable; resetting it to an empty document"
                );
                Self::reset(path)
            }
        }
    }

    fn reset(path: PathBuf) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut store = Self {
            path,
            document: TaskDocument::default(),
        };
        store.commit(TaskDocument::default())?;
        Ok(store)
    }

    /// Rewrite the whole file from `staged`, then adopt it as the in-memory
    /// document.
    fn commit(&mut self, staged: TaskDocument) -> Result<(), DatabaseError> {
        fs::write(&self.path, staged.to_vec_pretty()?)?;
        self.document = staged;
        Ok(())
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory document.
    #[must_use]
    pub const fn document(&self) -> &TaskDocument {
        &self.document
    }
}

impl TaskStore for DocumentStore {
    async fn get(&self, id: TaskId) -> Result<Option<Task>, DatabaseError> {
        Ok(self.document.tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn list(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>, DatabaseError> {
        Ok(self
            .document
            .tasks
            .iter()
            .filter(|task| statuses.contains(&task.status))
            .cloned()
            .collect())
    }

    async fn insert(&mut self, task: NewTask) -> Result<Option<TaskId>, DatabaseError> {
        let id = self.document.next_id;
        let mut staged = self.document.clone();
        staged.tasks.push(task.into_task(id));
        staged.next_id = successor(id)?;
        self.commit(staged)?;

        tracing::debug!(%id, "inserted task into document");
        Ok(Some(id))
    }

    async fn apply(
        &mut self,
        id: TaskId,
        update: &UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DatabaseError> {
        if update.is_empty() {
            return Ok(false);
        }
        let mut staged = self.document.clone();
        let Some(task) = staged.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(description) = &update.description {
            task.description = description.clone();
        }
        update.due_date.apply_to(&mut task.due_date);
        task.updated_at = Some(updated_at);
        self.commit(staged)?;

        tracing::debug!(%id, "updated task in document");
        Ok(true)
    }

    async fn remove(&mut self, id: TaskId) -> Result<bool, DatabaseError> {
        let Some(index) = self.document.tasks.iter().position(|task| task.id == id) else {
            return Ok(false);
        };
        let mut staged = self.document.clone();
        staged.tasks.remove(index);
        self.commit(staged)?;

        tracing::debug!(%id, "removed task from document");
        Ok(true)
    }

    async fn count(&self) -> Result<usize, DatabaseError> {
        Ok(self.document.tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use task_core::ids::Description;
    use tempfile::TempDir;

    use super::*;

    fn new_task(description: &str) -> NewTask {
        NewTask {
            description: Description::new(description).unwrap(),
            status: TaskStatus::Todo,
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn open_creates_missing_file_with_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tasks.json");

        let store = DocumentStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.document(), &TaskDocument::default());
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "{\n    \"next_id\": 1,\n    \"tasks\": []\n}\n");
    }

    #[test]
    fn open_resets_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();

        let store = DocumentStore::open(&path).unwrap();

        assert_eq!(store.document(), &TaskDocument::default());
        let reloaded: TaskDocument = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(reloaded, TaskDocument::default());
    }

    #[test]
    fn open_resets_document_with_invalid_status() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            r#"{"next_id": 2, "tasks": [{"id": 1, "description": "x", "status": "blocked",
                "due_date": null, "created_at": "2025-05-01T08:00:00Z", "updated_at": null}]}"#,
        )
        .unwrap();

        let store = DocumentStore::open(&path).unwrap();
        assert!(store.document().tasks.is_empty());
    }

    #[test]
    fn from_slice_repairs_stale_next_id() {
        let bytes = br#"{"next_id": 1, "tasks": [{"id": 4, "description": "x", "status": "done",
            "due_date": null, "created_at": "2025-05-01T08:00:00Z", "updated_at": null}]}"#;

        let document = TaskDocument::from_slice(bytes).unwrap();
        assert_eq!(document.next_id, TaskId::new(5));
    }

    #[test]
    fn from_slice_rejects_max_id_without_successor() {
        let bytes = format!(
            r#"{{"next_id": 1, "tasks": [{{"id": {}, "description": "x", "status": "todo",
            "due_date": null, "created_at": "2025-05-01T08:00:00Z", "updated_at": null}}]}}"#,
            u64::MAX
        );

        let result = TaskDocument::from_slice(bytes.as_bytes());
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[test]
    fn open_resets_document_whose_ids_are_exhausted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let bytes = format!(
            r#"{{"next_id": 1, "tasks": [{{"id": {}, "description": "x", "status": "todo",
            "due_date": null, "created_at": "2025-05-01T08:00:00Z", "updated_at": null}}]}}"#,
            u64::MAX
        );
        fs::write(&path, bytes).unwrap();

        let store = DocumentStore::open(&path).unwrap();
        assert_eq!(store.document(), &TaskDocument::default());
    }

    #[tokio::test]
    async fn open_resets_zero_next_id_and_assigns_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, r#"{"next_id": 0, "tasks": []}"#).unwrap();

        let mut store = DocumentStore::open(&path).unwrap();
        let id = store.insert(new_task("Write report")).await.unwrap().unwrap();

        assert_eq!(id, TaskId::new(1));
        assert_eq!(store.document().next_id, TaskId::new(2));
    }

    #[test]
    fn from_slice_rejects_zero_task_id() {
        let bytes = br#"{"next_id": 2, "tasks": [{"id": 0, "description": "x", "status": "todo",
            "due_date": null, "created_at": "2025-05-01T08:00:00Z", "updated_at": null}]}"#;

        assert!(matches!(
            TaskDocument::from_slice(bytes),
            Err(DatabaseError::Json(_))
        ));
    }

    #[tokio::test]
    async fn insert_fails_cleanly_when_ids_are_exhausted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(
            &path,
            format!(r#"{{"next_id": {}, "tasks": []}}"#, u64::MAX),
        )
        .unwrap();
        let mut store = DocumentStore::open(&path).unwrap();
        let before_file = fs::read(&path).unwrap();
        let before_doc = store.document().clone();

        let result = store.insert(new_task("One too many")).await;

        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
        assert_eq!(store.document(), &before_doc);
        assert_eq!(fs::read(&path).unwrap(), before_file);
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = DocumentStore::open(&path).unwrap();
        let id = store.insert(new_task("Write report")).await.unwrap().unwrap();
        let before = store.document().clone();

        // A directory at the file path makes every write fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(
            store.insert(new_task("Lost")).await,
            Err(DatabaseError::Io(_))
        ));
        let update = UpdateTask {
            status: Some(TaskStatus::Done),
            ..UpdateTask::default()
        };
        assert!(matches!(
            store.apply(id, &update, Utc::now()).await,
            Err(DatabaseError::Io(_))
        ));
        assert!(matches!(store.remove(id).await, Err(DatabaseError::Io(_))));

        assert_eq!(store.document(), &before);
    }

    #[tokio::test]
    async fn mutations_are_written_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = DocumentStore::open(&path).unwrap();

        let id = store.insert(new_task("Write report")).await.unwrap().unwrap();
        let update = UpdateTask {
            due_date: task_core::requests::Patch::Set(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            ..UpdateTask::default()
        };
        assert!(store.apply(id, &update, Utc::now()).await.unwrap());

        let reopened = DocumentStore::open(&path).unwrap();
        assert_eq!(reopened.document(), store.document());
        assert_eq!(reopened.document().next_id, TaskId::new(2));
        assert_eq!(
            reopened.document().tasks[0].due_date,
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[tokio::test]
    async fn next_id_survives_removal() {
        let dir = TempDir::new().unwrap();
        let mut store = DocumentStore::open(dir.path().join("tasks.json")).unwrap();

        store.insert(new_task("Task 1")).await.unwrap();
        let second = store.insert(new_task("Task 2")).await.unwrap().unwrap();
        assert!(store.remove(second).await.unwrap());

        let third = store.insert(new_task("Task 3")).await.unwrap().unwrap();
        assert_eq!(third, TaskId::new(3));
    }

    #[tokio::test]
    async fn missing_ids_do_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = DocumentStore::open(&path).unwrap();
        let before = fs::read(&path).unwrap();

        let update = UpdateTask {
            status: Some(TaskStatus::Done),
            ..UpdateTask::default()
        };
        assert!(!store.apply(TaskId::new(9), &update, Utc::now()).await.unwrap());
        assert!(!store.remove(TaskId::new(9)).await.unwrap());

        assert_eq!(fs::read(&path).unwrap(), before);
    }
}

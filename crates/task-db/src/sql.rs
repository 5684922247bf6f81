//! Relational backend over a local libSQL database.
//!
//! Each call opens its own connection, runs one autocommit statement and
//! drops the connection again.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use libsql::Builder;
use task_core::entities::Task;
use task_core::enums::TaskStatus;
use task_core::ids::{Description, TaskId};
use task_core::requests::UpdateTask;

use crate::error::DatabaseError;
use crate::helpers::{
    DATE_FORMAT, id_from_sql, id_to_sql, parse_datetime, parse_optional_date,
    parse_optional_datetime, parse_status,
};
use crate::migrations;
use crate::store::{NewTask, TaskStore};

const SELECT_COLS: &str = "id, description, status, due_date, created_at, updated_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    let description = Description::new(row.get::<String>(1)?)
        .map_err(|e| DatabaseError::Query(format!("Failed to read description: {e}")))?;
    Ok(Task {
        id: id_from_sql(row.get::<i64>(0)?)?,
        description,
        status: parse_status(&row.get::<String>(2)?)?,
        due_date: parse_optional_date(row.get::<Option<String>>(3)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_optional_datetime(row.get::<Option<String>>(5)?.as_deref())?,
    })
}

/// libSQL-backed task store.
pub struct SqlStore {
    db: libsql::Database,
    path: PathBuf,
}

impl std::fmt::Debug for SqlStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlStore").field("path", &self.path).finish_non_exhaustive()
    }
}

impl SqlStore {
    /// Open (or create) the database file at `path` and run migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file cannot be opened or a migration
    /// fails.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Builder::new_local(&path).build().await?;
        let store = Self { db, path };
        migrations::run(&store.connect()?).await?;

        tracing::debug!(path = %store.path.display(), "opened task database");
        Ok(store)
    }

    /// A fresh connection to the database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the connection cannot be opened.
    pub fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        Ok(self.db.connect()?)
    }

    /// The database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for SqlStore {
    async fn get(&self, id: TaskId) -> Result<Option<Task>, DatabaseError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"),
                [id_to_sql(id)?],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self, statuses: &[TaskStatus]) -> Result<Vec<Task>, DatabaseError> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (1..=statuses.len()).map(|i| format!("?{i}")).collect();
        let params: Vec<libsql::Value> = statuses.iter().map(|s| s.as_str().into()).collect();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks WHERE status IN ({}) ORDER BY id",
            placeholders.join(", ")
        );

        let conn = self.connect()?;
        let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    async fn insert(&mut self, task: NewTask) -> Result<Option<TaskId>, DatabaseError> {
        let conn = self.connect()?;
        let due_date = task.due_date.map(|d| d.format(DATE_FORMAT).to_string());
        conn.execute(
            "INSERT INTO tasks (description, status, due_date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, NULL)",
            libsql::params![
                task.description.as_str(),
                task.status.as_str(),
                due_date.as_deref(),
                task.created_at.to_rfc3339()
            ],
        )
        .await?;

        let rowid = conn.last_insert_rowid();
        if rowid <= 0 {
            tracing::warn!(rowid, "insert did not report a generated id");
            return Ok(None);
        }
        let id = id_from_sql(rowid)?;
        tracing::debug!(%id, "inserted task row");
        Ok(Some(id))
    }

    async fn apply(
        &mut self,
        id: TaskId,
        update: &UpdateTask,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.as_str().into());
            idx += 1;
        }
        if let Some(due_date) = update.due_date.into_update() {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.map_or(libsql::Value::Null, |d| {
                d.format(DATE_FORMAT).to_string().into()
            }));
            idx += 1;
        }

        if sets.is_empty() {
            return Ok(false);
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(updated_at.to_rfc3339().into());
        idx += 1;

        params.push(id_to_sql(id)?.into());
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{idx}", sets.join(", "));

        let conn = self.connect()?;
        let changed = conn.execute(&sql, libsql::params_from_iter(params)).await?;
        tracing::debug!(%id, changed, "applied task update");
        Ok(changed > 0)
    }

    async fn remove(&mut self, id: TaskId) -> Result<bool, DatabaseError> {
        let conn = self.connect()?;
        let changed = conn
            .execute("DELETE FROM tasks WHERE id = ?1", [id_to_sql(id)?])
            .await?;
        tracing::debug!(%id, changed, "deleted task row");
        Ok(changed > 0)
    }

    async fn count(&self) -> Result<usize, DatabaseError> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT COUNT(*) FROM tasks", ()).await?;
        let count = match rows.next().await? {
            Some(row) => row.get::<i64>(0)?,
            None => 0,
        };
        usize::try_from(count)
            .map_err(|_| DatabaseError::InvalidState(format!("negative row count {count}")))
    }
}

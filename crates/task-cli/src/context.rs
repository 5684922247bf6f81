use anyhow::Context;
use task_config::StorageConfig;
use task_db::{ConfiguredStore, TaskRepository};

/// Everything a command handler needs.
#[derive(Debug)]
pub struct AppContext {
    pub repo: TaskRepository<ConfiguredStore>,
}

impl AppContext {
    /// Open the configured backend.
    pub async fn open(storage: &StorageConfig) -> anyhow::Result<Self> {
        let store = ConfiguredStore::open(storage).await.with_context(|| {
            format!(
                "failed to open {} task store at {}",
                storage.backend,
                storage.resolved_path().display()
            )
        })?;
        Ok(Self {
            repo: TaskRepository::new(store),
        })
    }
}

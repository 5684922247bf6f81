use task_core::ids::TaskId;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::error::CommandError;
use crate::output::notice;

/// Handle `task-cli delete <id>`.
pub async fn run(id: TaskId, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.repo.delete_by_id(id).await? {
        return Err(CommandError::NotFound("Could not delete task.".to_string()).into());
    }

    tracing::info!(%id, "task deleted");
    if flags.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "id": id, "deleted": true }));
    } else {
        notice("Task was deleted successfully.", flags);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use task_config::Backend;
    use task_core::enums::TaskStatus;
    use task_core::ids::TaskId;
    use task_core::requests::CreateTask;
    use tempfile::TempDir;

    use super::run;
    use crate::context::test_support::{quiet_flags, test_context};
    use crate::error::{CommandError, EXIT_NOT_FOUND};

    #[tokio::test]
    async fn deletes_existing_task() {
        let dir = TempDir::new().unwrap();
        let mut ctx = test_context(&dir, Backend::Json).await;
        ctx.repo
            .add(CreateTask::new("Doomed", TaskStatus::Todo).unwrap())
            .await
            .unwrap();

        run(TaskId::new(1), &mut ctx, &quiet_flags()).await.unwrap();
        assert_eq!(ctx.repo.size().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleting_missing_task_exits_not_found() {
        let dir = TempDir::new().unwrap();
        let mut ctx = test_context(&dir, Backend::Sqlite).await;

        let err = run(TaskId::new(1), &mut ctx, &quiet_flags()).await.unwrap_err();
        let err = err.downcast_ref::<CommandError>().unwrap();
        assert_eq!(err.to_string(), "Could not delete task.");
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
    }
}

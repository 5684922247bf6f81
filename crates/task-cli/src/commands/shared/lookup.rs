use task_core::entities::Task;
use task_core::ids::TaskId;

use crate::context::AppContext;
use crate::error::CommandError;

/// Fetch a task or fail with the standard not-found message.
pub async fn require_task(ctx: &AppContext, id: TaskId) -> anyhow::Result<Task> {
    ctx.repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CommandError::task_not_found(id).into())
}

use task_core::ids::TaskId;
use task_core::requests::UpdateTaskBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_task;
use crate::commands::shared::parse::parse_due_date;
use crate::context::AppContext;
use crate::error::CommandError;
use crate::output::output_task;

/// Handle `task-cli due <id> <YYYY-MM-DD|->`.
pub async fn run(
    id: TaskId,
    date: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = require_task(ctx, id).await?;
    let due_date = parse_due_date(date)?;

    let update = UpdateTaskBuilder::new().due_date(due_date).build();
    if !ctx.repo.update(&task, update).await? {
        return Err(CommandError::Failed("Could not update task.".to_string()).into());
    }

    let updated = require_task(ctx, id).await?;
    output_task(&updated, flags)
}

use task_core::ids::TaskId;
use task_core::requests::UpdateTaskBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_task;
use crate::commands::shared::parse::require_description;
use crate::context::AppContext;
use crate::error::CommandError;
use crate::output::output_task;

/// Handle `task-cli update <id> <description>`.
pub async fn run(
    id: TaskId,
    description: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = require_task(ctx, id).await?;
    let update = UpdateTaskBuilder::new()
        .description(require_description(description)?)
        .map_err(CommandError::from)?
        .build();

    if !ctx.repo.update(&task, update).await? {
        return Err(CommandError::Failed("Could not update task.".to_string()).into());
    }

    let updated = require_task(ctx, id).await?;
    output_task(&updated, flags)
}

use task_core::enums::TaskStatus;
use task_core::requests::CreateTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::require_description;
use crate::context::AppContext;
use crate::error::CommandError;
use crate::output::{notice, output_task};

/// Handle `task-cli add <description>`.
pub async fn run(
    description: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let description = require_description(description)?;
    let request = CreateTask::new(description, TaskStatus::Todo).map_err(CommandError::from)?;

    let Some(task) = ctx.repo.add(request).await? else {
        return Err(CommandError::Failed("Could not add task.".to_string()).into());
    };

    tracing::info!(id = %task.id, "task added");
    notice("Task was added successfully.", flags);
    output_task(&task, flags)
}

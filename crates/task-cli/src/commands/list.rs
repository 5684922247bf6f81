use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_status;
use crate::context::AppContext;
use crate::output::output_tasks;

/// Handle `task-cli list [status]`.
pub async fn run(
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tasks = match status {
        Some(raw) => ctx.repo.find_by_status(&[parse_status(raw)?]).await?,
        None => ctx.repo.find_all().await?,
    };
    tracing::debug!(count = tasks.len(), ?status, "listing tasks");
    output_tasks(&tasks, flags)
}

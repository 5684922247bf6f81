use task_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List { status } => commands::list::run(status.as_deref(), ctx, flags).await,
        Commands::Add { description } => commands::add::run(&description, ctx, flags).await,
        Commands::Update { id, description } => {
            commands::update::run(id, &description, ctx, flags).await
        }
        Commands::Delete { id } => commands::delete::run(id, ctx, flags).await,
        Commands::Due { id, date } => commands::due::run(id, &date, ctx, flags).await,
        Commands::MarkTodo { id } => commands::mark::run(id, TaskStatus::Todo, ctx, flags).await,
        Commands::MarkInProgress { id } => {
            commands::mark::run(id, TaskStatus::InProgress, ctx, flags).await
        }
        Commands::MarkDone { id } => commands::mark::run(id, TaskStatus::Done, ctx, flags).await,
    }
}

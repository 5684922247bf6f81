use task_core::entities::Task;

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

/// Shown instead of an empty listing.
pub const NO_TASKS: &str = "No tasks to show.";

/// Render a single task in the requested format.
pub fn render_task(task: &Task, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Card => Ok(task.to_string()),
        OutputFormat::Table => Ok(table::render_task_table(
            std::slice::from_ref(task),
            table::TableOptions::from_env(),
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(task)?),
    }
}

/// Render a task listing in the requested format.
///
/// Card and table output say so when there is nothing to list; JSON output is
/// always an array.
pub fn render_tasks(tasks: &[Task], format: OutputFormat) -> anyhow::Result<String> {
    if tasks.is_empty() && format != OutputFormat::Json {
        return Ok(NO_TASKS.to_string());
    }

    match format {
        OutputFormat::Card => Ok(tasks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(table::render_task_table(
            tasks,
            table::TableOptions::from_env(),
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tasks)?),
    }
}

/// Print a single task.
pub fn output_task(task: &Task, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render_task(task, flags.format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a task listing.
pub fn output_tasks(tasks: &[Task], flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render_tasks(tasks, flags.format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a confirmation line. Suppressed by `--quiet` and in JSON mode.
pub fn notice(message: &str, flags: &GlobalFlags) {
    if !flags.quiet && flags.format != OutputFormat::Json {
        println!("{message}");
    }
}

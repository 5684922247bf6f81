use clap::ValueEnum;
use task_config::Backend;

/// Output mode selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Record cards, one per task.
    Card,
    Table,
    Json,
}

impl From<task_config::OutputFormat> for OutputFormat {
    fn from(format: task_config::OutputFormat) -> Self {
        match format {
            task_config::OutputFormat::Card => Self::Card,
            task_config::OutputFormat::Table => Self::Table,
            task_config::OutputFormat::Json => Self::Json,
        }
    }
}

/// Storage backend selectable on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum BackendArg {
    Json,
    Sqlite,
}

impl From<BackendArg> for Backend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Json => Self::Json,
            BackendArg::Sqlite => Self::Sqlite,
        }
    }
}

/// Global flags after configuration defaults have been applied.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
}

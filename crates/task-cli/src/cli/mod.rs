use std::path::PathBuf;

use clap::Parser;
use task_config::TaskCliConfig;

pub mod global;
pub mod root_commands;

pub use global::{BackendArg, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `task-cli` binary.
#[derive(Debug, Parser)]
#[command(name = "task-cli", version, about = "A CLI tool for managing TODOs.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: card, table, json (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Storage backend (overrides storage.backend)
    #[arg(short, long, global = true)]
    pub backend: Option<BackendArg>,

    /// Storage file for the active backend (overrides the configured path)
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract global flags, falling back to configured defaults.
    #[must_use]
    pub fn global_flags(&self, config: &TaskCliConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            quiet: self.quiet,
        }
    }

    /// Apply storage flags on top of loaded configuration.
    pub fn apply_storage_overrides(&self, config: &mut TaskCliConfig) {
        if let Some(backend) = self.backend {
            config.storage.backend = backend.into();
        }
        if let Some(path) = &self.path {
            config.storage.set_active_path(path.clone());
        }
    }
}

//! # task-config
//!
//! Layered configuration loading for task-cli using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASK_CLI_*` prefix, `__` as separator)
//! 2. Project-level `.task-cli/config.toml`
//! 3. User-level `~/.config/task-cli/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASK_CLI_STORAGE__BACKEND` -> `storage.backend`,
//! `TASK_CLI_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use task_config::TaskCliConfig;
//!
//! let config = TaskCliConfig::load().expect("config");
//! println!("tasks live in {}", config.storage.resolved_path().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::{GeneralConfig, OutputFormat};
pub use storage::{Backend, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "TASK_CLI_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskCliConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TaskCliConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; the binary loads it with `dotenvy` first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".task-cli/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("task-cli").join("config.toml"))
    }
}

//! Storage backend selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Which persistence backend holds the tasks.
///
/// The two formats are not interchangeable; switching backends starts from
/// an empty store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Whole-file JSON document.
    #[default]
    Json,
    /// Single `tasks` table in a local SQLite-compatible database.
    Sqlite,
}

impl Backend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_json_path() -> PathBuf {
    PathBuf::from("tasks.json")
}

fn default_sqlite_path() -> PathBuf {
    PathBuf::from("tasks.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Active backend.
    #[serde(default)]
    pub backend: Backend,

    /// Document file used by the `json` backend.
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,

    /// Database file used by the `sqlite` backend.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: PathBuf,
}

impl StorageConfig {
    /// Path of the file used by the active backend.
    #[must_use]
    pub fn resolved_path(&self) -> &Path {
        match self.backend {
            Backend::Json => &self.json_path,
            Backend::Sqlite => &self.sqlite_path,
        }
    }

    /// Overrides the path of the active backend.
    pub fn set_active_path(&mut self, path: PathBuf) {
        match self.backend {
            Backend::Json => self.json_path = path,
            Backend::Sqlite => self.sqlite_path = path,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            json_path: default_json_path(),
            sqlite_path: default_sqlite_path(),
        }
    }
}

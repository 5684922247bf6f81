//! Entity structs for task-cli.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so the document
//! backend can persist them directly and tests can validate stored files.

mod task;

pub use task::Task;

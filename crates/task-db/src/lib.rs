//! # task-db
//!
//! Task persistence for task-cli.
//!
//! Two interchangeable backends implement [`TaskStore`]:
//!
//! - [`DocumentStore`] keeps every task in one pretty-printed JSON file and
//!   rewrites it on each mutation.
//! - [`SqlStore`] keeps a `tasks` table in a local libSQL database and opens a
//!   connection per call.
//!
//! [`TaskRepository`] sits on top of either backend and owns timestamps and
//! no-op detection. [`ConfiguredStore`] picks a backend from configuration.

pub mod configured;
pub mod document;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repository;
pub mod sql;
pub mod store;

#[cfg(test)]
mod test_support;

pub use configured::ConfiguredStore;
pub use document::{DocumentStore, TaskDocument};
pub use error::DatabaseError;
pub use repository::TaskRepository;
pub use sql::SqlStore;
pub use store::{NewTask, TaskStore};

//! # task-core
//!
//! Core types shared by every task-cli crate:
//! - The `Task` entity and its `TaskStatus` enum
//! - Identifier and validated scalar types
//! - Description validation
//! - Create and partial-update request types
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod requests;
pub mod validation;

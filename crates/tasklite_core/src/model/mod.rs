//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record used by store, query and storage.
//! - Keep text validation on one rule shared by creation and hydration.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Ordering is carried by list position, never by the id itself.

pub mod task;

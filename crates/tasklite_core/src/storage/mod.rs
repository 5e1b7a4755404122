//! Persistence boundary for the task list.
//!
//! # Responsibility
//! - Define the raw load/save contract the store depends on.
//! - Provide memory, file and SQLite-backed adapters.
//! - Own the persisted wire format.
//!
//! # Invariants
//! - Adapters move opaque serialized strings; they never interpret tasks.
//! - A missing prior state is `Ok(None)`, not an error.

pub mod task_storage;
pub mod wire;

//! Authoritative task list state and its command surface.
//!
//! # Responsibility
//! - Own the one mutable task list and expose commands over it.
//! - Keep view layers limited to commands in, derived snapshots out.

pub mod task_store;

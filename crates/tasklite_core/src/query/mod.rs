//! Derived read-side queries over the task list.
//!
//! # Responsibility
//! - Turn `(tasks, filter)` into display state without mutating anything.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs.

pub mod filter;

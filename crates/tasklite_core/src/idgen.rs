//! Task id generation capability.
//!
//! # Responsibility
//! - Produce ids unique with overwhelming probability across the process
//!   lifetime.
//! - Stay injectable so tests can pin deterministic ids.
//!
//! # Invariants
//! - Generated ids are never nil.
//! - Ids carry no ordering meaning; list position does.

use crate::model::task::TaskId;
use uuid::Uuid;

/// Source of fresh task ids.
pub trait IdGenerator {
    /// Returns the next id. Must never return nil or a previously returned
    /// value.
    fn next_id(&mut self) -> TaskId;
}

/// Cryptographically-random v4 uuids, the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests: counts up from 1 inside the uuid
/// integer layout, so generated ids are stable and never nil.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    issued: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id that this generator handed out at 1-based position `n`.
    pub fn id_at(n: u64) -> TaskId {
        Uuid::from_u128(u128::from(n))
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TaskId {
        self.issued += 1;
        Self::id_at(self.issued)
    }
}

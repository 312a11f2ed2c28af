//! Record id generation
//!
//! Id creation is an injectable capability rather than a call to global
//! randomness, so tests can pin ids.

use uuid::Uuid;

/// Source of fresh record ids.
///
/// Contract: an implementation must never repeat an id within the lifetime
/// of the store it serves, including after deletions.
pub trait IdGenerator {
    /// Returns a fresh id.
    fn generate(&mut self) -> Uuid;
}

/// Default generator backed by random v4 uuids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic generator for tests: ids 1, 2, 3, ... as uuid integers.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Starts counting from 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}

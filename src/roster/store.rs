//! In-memory roster store
//!
//! Owned by the top-level session for the lifetime of the page; no
//! persistence, no re-validation, no side effects beyond its own vector.

use uuid::Uuid;

use super::ident::{IdGenerator, RandomIds};
use super::student::{Student, StudentDraft};

/// Ordered collection of student records, newest first.
#[derive(Debug)]
pub struct RosterStore<G: IdGenerator = RandomIds> {
    records: Vec<Student>,
    ids: G,
}

impl RosterStore<RandomIds> {
    /// Creates an empty roster with random ids.
    pub fn new() -> Self {
        Self::with_id_generator(RandomIds)
    }
}

impl Default for RosterStore<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> RosterStore<G> {
    /// Creates an empty roster with an injected id generator.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    /// Assigns a fresh id, prepends the record, and returns it.
    ///
    /// Infallible: the draft already passed validation upstream.
    pub fn add(&mut self, draft: StudentDraft) -> &Student {
        let id = self.ids.generate();
        debug_assert!(
            self.records.iter().all(|r| r.id != id),
            "id generator repeated an id"
        );
        self.records.insert(0, draft.into_student(id));
        &self.records[0]
    }

    /// Removes the record with the given id, if present.
    ///
    /// Returns whether a removal occurred; a missing id is a silent no-op.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    /// The current records, newest first. Read-only view.
    pub fn list(&self) -> &[Student] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: Uuid) -> Option<&Student> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records currently stored.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

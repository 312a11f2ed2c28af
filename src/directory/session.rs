//! The directory session
//!
//! Control flow: raw input -> engine -> on success, roster prepend -> the
//! caller re-renders from `students()`. Deletes go straight to the roster.
//! Every operation runs to completion before the next; the UI event queue
//! is the only serializer this core needs.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::roster::{IdGenerator, RandomIds, RosterStore, Student};
use crate::rules::RuleSet;
use crate::validate::{FieldErrors, FieldValues, ValidationEngine};

use super::events::Notification;

const ADDED_MESSAGE: &str = "Student added successfully!";

/// Result of one submit: either the stored record or the full error
/// mapping. The roster is unchanged on rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The record as stored, id assigned
    Added(Student),
    /// Per-field errors for the rendering layer
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    /// Whether a record was added.
    pub fn is_added(&self) -> bool {
        matches!(self, SubmitOutcome::Added(_))
    }

    /// The notification event to hand the toast collaborator.
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Added(_) => Notification::success(ADDED_MESSAGE),
            SubmitOutcome::Rejected(errors) => {
                Notification::validation_failure(Some(errors.to_string()))
            }
        }
    }
}

/// One page session: an engine and the roster it feeds.
pub struct Directory<G: IdGenerator = RandomIds> {
    engine: ValidationEngine,
    roster: RosterStore<G>,
}

impl Directory<RandomIds> {
    /// Creates a session over the given rule set with random ids.
    pub fn new(rules: RuleSet) -> Self {
        Self::with_id_generator(rules, RandomIds)
    }
}

impl<G: IdGenerator> Directory<G> {
    /// Creates a session with an injected id generator.
    pub fn with_id_generator(rules: RuleSet, ids: G) -> Self {
        Self {
            engine: ValidationEngine::new(rules),
            roster: RosterStore::with_id_generator(ids),
        }
    }

    /// Validates and, on success, stores a submission. Uses today's date
    /// for age checks.
    pub fn submit(&mut self, input: &FieldValues) -> SubmitOutcome {
        self.submit_on(input, Utc::now().date_naive())
    }

    /// Like `submit`, with the date supplied for deterministic tests.
    pub fn submit_on(&mut self, input: &FieldValues, today: NaiveDate) -> SubmitOutcome {
        match self.engine.validate(input, today) {
            Ok(draft) => SubmitOutcome::Added(self.roster.add(draft).clone()),
            Err(errors) => SubmitOutcome::Rejected(errors),
        }
    }

    /// Deletes a record by id. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: Uuid) -> bool {
        self.roster.delete(id)
    }

    /// The current records, newest first.
    pub fn students(&self) -> &[Student] {
        self.roster.list()
    }

    /// Live record count for the "N students" header.
    pub fn count(&self) -> usize {
        self.roster.count()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The rule set this session enforces.
    pub fn rules(&self) -> &RuleSet {
        self.engine.rules()
    }
}

//! Roster subsystem for rosterkit
//!
//! The in-memory ordered collection of `Student` records for one page
//! session, plus the id capability behind record creation.
//!
//! # Invariants
//!
//! - Every stored record passed validation upstream; the store never
//!   re-validates
//! - Ids are unique for the lifetime of the roster and never reused
//! - Newest record first; deletion does not reorder survivors
//! - Records are immutable once stored

mod ident;
mod store;
mod student;

pub use ident::{IdGenerator, RandomIds, SequentialIds};
pub use store::RosterStore;
pub use student::{Student, StudentDraft, DATE_INPUT_FORMAT};

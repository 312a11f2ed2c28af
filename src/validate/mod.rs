//! Validation subsystem for rosterkit
//!
//! Turns raw form input into a normalized `StudentDraft` or a per-field
//! error mapping.
//!
//! # Design Principles
//!
//! - All-or-nothing: if any field fails, no record is produced
//! - Every failing field is reported at once, not just the first
//! - Input filters and normalization run before any rule fires
//! - Deterministic: the same input and date validate the same way every time
//! - The roster never re-validates; this is the only gate

mod engine;
mod errors;

pub use engine::{FieldValues, ValidationEngine};
pub use errors::FieldErrors;

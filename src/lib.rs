//! rosterkit - a strict, deterministic student-directory core
//!
//! Declarative field validation plus an in-memory roster of immutable
//! `Student` records. The rendering layer (forms, tables, toasts) is an
//! external collaborator; this crate owns the rules that decide whether raw
//! input becomes a record, and how the roster is mutated.

pub mod directory;
pub mod roster;
pub mod rules;
pub mod validate;

//! Field rule subsystem for rosterkit
//!
//! A `RuleSet` is the declarative configuration that decides which fields a
//! directory variant collects and how strictly each one is validated. The
//! form variants (strict, lenient, extended) are all instances of the same
//! core with different rule sets.
//!
//! # Design Principles
//!
//! - Rules are data, not code: one engine, many variants
//! - Patterns compile once, at rule construction
//! - Input filters are part of the field configuration, applied before
//!   any rule runs
//! - Malformed rule sets are rejected at construction, never at submit time

mod errors;
mod filters;
mod profiles;
mod types;

pub use errors::{RuleError, RuleResult};
pub use filters::{dial_string, digits_only, upper_alphanumeric, InputFilter};
pub use profiles::{field, PhoneFormat, COURSES, GENDERS};
pub use profiles::{
    EMAIL_PATTERN, NAME_PATTERN, PHONE_LENIENT_PATTERN, PHONE_STRICT_PATTERN, STUDENT_ID_PATTERN,
};
pub use types::{FieldRule, FieldSpec, Normalize, RuleSet};

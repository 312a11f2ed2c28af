//! # Rule Errors
//!
//! Construction-time errors for rule sets. A malformed rule set is a
//! programming error surfaced to the caller; it can never reach the
//! validation engine.

use thiserror::Error;

/// Result type for rule-set construction
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while building a rule set
#[derive(Debug, Error)]
pub enum RuleError {
    /// A pattern rule failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Two field specs share the same wire name
    #[error("duplicate field '{0}' in rule set")]
    DuplicateField(String),

    /// An enumerated field was declared with no allowed values
    #[error("enumerated field '{0}' has no options")]
    EmptyChoice(String),
}

//! Rule type definitions
//!
//! Rule semantics:
//! - `Required`, `MinLength`, `MaxLength`: string length bounds after
//!   trimming leading/trailing whitespace
//! - `Pattern`: full-string match; the supplied pattern is anchored
//!   automatically
//! - `OneOf`: exactly one of a fixed, ordered set of allowed values; no
//!   selection at all is a distinct failure from an unknown value
//! - `AgeBetween`: the field parses as a calendar date and the implied age
//!   falls inside the inclusive bound

use regex::Regex;

use super::errors::{RuleError, RuleResult};
use super::filters::InputFilter;

/// A single validation rule for one field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Non-empty after trimming
    Required,
    /// At least this many characters after trimming
    MinLength(usize),
    /// At most this many characters after trimming
    MaxLength(usize),
    /// Full-string pattern match with a custom failure message
    Pattern {
        /// Compiled, anchored pattern
        regex: Regex,
        /// Message shown when the match fails
        message: String,
    },
    /// Exactly one of a fixed set of allowed values
    OneOf {
        /// Allowed values, in display order
        options: Vec<String>,
    },
    /// Date-of-birth style check: implied age within `[min, max]`
    AgeBetween {
        /// Minimum age, inclusive
        min: i32,
        /// Maximum age, inclusive
        max: i32,
    },
}

impl FieldRule {
    /// Builds a pattern rule. The pattern is compiled once here and matched
    /// against the full string, so callers do not anchor it themselves.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> RuleResult<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(FieldRule::Pattern {
            regex,
            message: message.into(),
        })
    }
}

/// Validation-time normalization for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalize {
    /// Trim only (trimming always happens)
    #[default]
    None,
    /// Lower-case before any rule runs (email)
    Lowercase,
}

/// Declarative configuration for a single input field.
///
/// `name` is the wire key the form collaborator submits under; `label` is
/// the human-readable name used to build rule messages.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    label: String,
    filter: InputFilter,
    normalize: Normalize,
    rules: Vec<FieldRule>,
}

impl FieldSpec {
    /// Creates a field spec with no filter and no rules.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            filter: InputFilter::None,
            normalize: Normalize::None,
            rules: Vec::new(),
        }
    }

    /// Sets the UI-level input filter for this field.
    pub fn filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Lower-cases the value before validation.
    pub fn lowercased(mut self) -> Self {
        self.normalize = Normalize::Lowercase;
        self
    }

    /// Requires a non-empty value after trimming.
    pub fn required(mut self) -> Self {
        self.rules.push(FieldRule::Required);
        self
    }

    /// Requires at least `min` characters after trimming.
    pub fn min_length(mut self, min: usize) -> Self {
        self.rules.push(FieldRule::MinLength(min));
        self
    }

    /// Requires at most `max` characters after trimming.
    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.push(FieldRule::MaxLength(max));
        self
    }

    /// Constrains the value to one of a fixed set.
    pub fn one_of<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(FieldRule::OneOf {
            options: options.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Requires the value to parse as a date implying an age in `[min, max]`.
    pub fn age_between(mut self, min: i32, max: i32) -> Self {
        self.rules.push(FieldRule::AgeBetween { min, max });
        self
    }

    /// Appends an already-built rule (pattern rules arrive this way).
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The wire key this field is submitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable label used in rule messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The UI-level input filter.
    pub fn input_filter(&self) -> InputFilter {
        self.filter
    }

    /// The validation-time normalization step.
    pub fn normalize(&self) -> Normalize {
        self.normalize
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}

/// An ordered collection of field specs: one directory variant.
#[derive(Debug, Clone)]
pub struct RuleSet {
    fields: Vec<FieldSpec>,
}

impl RuleSet {
    /// Builds a rule set, rejecting duplicate field names and enumerated
    /// fields with no options.
    pub fn new(fields: Vec<FieldSpec>) -> RuleResult<Self> {
        for (i, spec) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name() == spec.name()) {
                return Err(RuleError::DuplicateField(spec.name().to_string()));
            }
            for rule in spec.rules() {
                if let FieldRule::OneOf { options } = rule {
                    if options.is_empty() {
                        return Err(RuleError::EmptyChoice(spec.name().to_string()));
                    }
                }
            }
        }
        Ok(Self { fields })
    }

    /// The field specs, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field spec by wire name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name() == name)
    }

    /// Number of fields in this variant.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the rule set declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

//! The validation engine
//!
//! Evaluation order per field:
//!
//! 1. Input filter (phone digits, student-id upper-casing)
//! 2. Lower-casing, where the field declares it (email)
//! 3. Trim
//! 4. Rules, in declared order; the first failing rule's message wins
//!
//! Fields are independent: every failing field is reported, and a record is
//! produced only when none fail.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Utc};

use crate::roster::{StudentDraft, DATE_INPUT_FORMAT};
use crate::rules::{FieldRule, FieldSpec, Normalize, RuleSet};

use super::errors::FieldErrors;

/// Raw field-value mapping from the form collaborator.
pub type FieldValues = HashMap<String, String>;

/// Checks raw input against a rule set and produces normalized drafts.
pub struct ValidationEngine {
    rules: RuleSet,
}

impl ValidationEngine {
    /// Creates an engine for one rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this engine enforces.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validates against today's date.
    pub fn validate_now(&self, input: &FieldValues) -> Result<StudentDraft, FieldErrors> {
        self.validate(input, Utc::now().date_naive())
    }

    /// Validates raw input, with `today` supplied for age checks.
    ///
    /// Returns a normalized draft when every field passes, otherwise the
    /// full per-field error mapping. A missing field validates as empty
    /// input.
    pub fn validate(
        &self,
        input: &FieldValues,
        today: NaiveDate,
    ) -> Result<StudentDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut normalized = BTreeMap::new();

        for spec in self.rules.fields() {
            let raw = input.get(spec.name()).map(String::as_str).unwrap_or("");
            let value = normalize_input(spec, raw);
            match check_field(spec, &value, today) {
                Some(message) => errors.insert(spec.name(), message),
                None => {
                    normalized.insert(spec.name().to_string(), value);
                }
            }
        }

        if errors.is_empty() {
            Ok(StudentDraft::from_fields(&normalized))
        } else {
            Err(errors)
        }
    }
}

/// Sanitizes raw input the way the rules declare: filter, then lower-case
/// where requested, then trim.
fn normalize_input(spec: &FieldSpec, raw: &str) -> String {
    let filtered = spec.input_filter().apply(raw);
    let filtered = match spec.normalize() {
        Normalize::Lowercase => filtered.to_lowercase(),
        Normalize::None => filtered,
    };
    filtered.trim().to_string()
}

/// Returns the first failing rule's message, if any.
fn check_field(spec: &FieldSpec, value: &str, today: NaiveDate) -> Option<String> {
    spec.rules()
        .iter()
        .find_map(|rule| check_rule(spec, rule, value, today))
}

fn check_rule(spec: &FieldSpec, rule: &FieldRule, value: &str, today: NaiveDate) -> Option<String> {
    match rule {
        FieldRule::Required => value
            .is_empty()
            .then(|| format!("{} is required", spec.label())),
        FieldRule::MinLength(min) => (value.chars().count() < *min)
            .then(|| format!("{} must be at least {} characters", spec.label(), min)),
        FieldRule::MaxLength(max) => (value.chars().count() > *max)
            .then(|| format!("{} must be under {} characters", spec.label(), max)),
        FieldRule::Pattern { regex, message } => (!regex.is_match(value)).then(|| message.clone()),
        FieldRule::OneOf { options } => {
            if value.is_empty() {
                // No selection at all reads differently from a bad value
                Some(format!("Please select a {}", spec.label().to_lowercase()))
            } else if !options.iter().any(|option| option == value) {
                Some(format!(
                    "'{}' is not a valid {}",
                    value,
                    spec.label().to_lowercase()
                ))
            } else {
                None
            }
        }
        FieldRule::AgeBetween { min, max } => {
            // Age is the bare difference of calendar years; month and day
            // are not consulted.
            let in_range = NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT)
                .ok()
                .map(|dob| {
                    let age = today.year() - dob.year();
                    age >= *min && age <= *max
                })
                .unwrap_or(false);
            (!in_range).then(|| format!("Student must be between {} and {} years old", min, max))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{field, FieldSpec, InputFilter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    fn strict_input() -> FieldValues {
        let mut input = FieldValues::new();
        input.insert(field::NAME.into(), "John Doe".into());
        input.insert(field::EMAIL.into(), "JOHN@School.EDU".into());
        input.insert(field::PHONE.into(), "9876543210".into());
        input.insert(field::PARENT_NAME.into(), "Jane Doe".into());
        input.insert(field::PARENT_PHONE.into(), "9123456789".into());
        input
    }

    #[test]
    fn test_valid_strict_submission_normalizes() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let draft = engine.validate(&strict_input(), today()).unwrap();
        assert_eq!(draft.email, "john@school.edu");
        assert_eq!(draft.name, "John Doe");
        assert_eq!(draft.phone, "9876543210");
        assert_eq!(draft.parent_name, "Jane Doe");
        assert_eq!(draft.parent_phone, "9123456789");
        assert_eq!(draft.student_id, None);
    }

    #[test]
    fn test_single_rule_violation_reports_that_field_only() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.insert(field::NAME.into(), "J".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(field::NAME),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_all_failing_fields_reported_at_once() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.insert(field::NAME.into(), "J".into());
        input.insert(field::EMAIL.into(), "not-an-email".into());
        input.insert(field::PHONE.into(), "123".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(field::NAME));
        assert!(errors.contains(field::EMAIL));
        assert!(errors.contains(field::PHONE));
    }

    #[test]
    fn test_whitespace_only_required_field_fails() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.insert(field::NAME.into(), "   ".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(field::NAME), Some("Name is required"));
    }

    #[test]
    fn test_missing_field_validates_as_empty() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.remove(field::PARENT_NAME);

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(field::PARENT_NAME), Some("Parent name is required"));
    }

    #[test]
    fn test_phone_filter_runs_before_validation() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.insert(field::PHONE.into(), "(987) 654-3210".into());

        let draft = engine.validate(&input, today()).unwrap();
        assert_eq!(draft.phone, "9876543210");
    }

    #[test]
    fn test_strict_name_charset() {
        let engine = ValidationEngine::new(RuleSet::strict());
        let mut input = strict_input();
        input.insert(field::NAME.into(), "John3 Doe".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(field::NAME),
            Some("Name can only contain letters, spaces, hyphens, and apostrophes")
        );

        input.insert(field::NAME.into(), "Anne-Marie O'Neill".into());
        assert!(engine.validate(&input, today()).is_ok());
    }

    #[test]
    fn test_lenient_phone_accepts_international() {
        let engine = ValidationEngine::new(RuleSet::lenient());
        let mut input = strict_input();
        input.insert(field::PHONE.into(), "+44 20 7946 0958".into());

        let draft = engine.validate(&input, today()).unwrap();
        assert_eq!(draft.phone, "+442079460958");
    }

    #[test]
    fn test_lenient_phone_still_bounds_length() {
        let engine = ValidationEngine::new(RuleSet::lenient());
        let mut input = strict_input();
        input.insert(field::PHONE.into(), "+1234567890123456".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert!(errors.contains(field::PHONE));
    }

    fn extended_input() -> FieldValues {
        let mut input = strict_input();
        input.insert(field::STUDENT_ID.into(), "CS2024001".into());
        input.insert(field::DATE_OF_BIRTH.into(), "2005-03-14".into());
        input.insert(field::GENDER.into(), "Male".into());
        input.insert(field::COURSE.into(), "Computer Science".into());
        input.insert(
            field::ADDRESS.into(),
            "42 Evergreen Terrace, Springfield".into(),
        );
        input
    }

    #[test]
    fn test_valid_extended_submission() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let draft = engine.validate(&extended_input(), today()).unwrap();
        assert_eq!(draft.student_id.as_deref(), Some("CS2024001"));
        assert_eq!(
            draft.date_of_birth,
            NaiveDate::from_ymd_opt(2005, 3, 14)
        );
        assert_eq!(draft.gender.as_deref(), Some("Male"));
        assert_eq!(draft.course.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_student_id_filter_uppercases() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.insert(field::STUDENT_ID.into(), "cs2024-001".into());

        let draft = engine.validate(&input, today()).unwrap();
        assert_eq!(draft.student_id.as_deref(), Some("CS2024001"));
    }

    #[test]
    fn test_missing_selection_gets_selection_message() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.remove(field::GENDER);

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(field::GENDER), Some("Please select a gender"));
    }

    #[test]
    fn test_unknown_selection_gets_value_message() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.insert(field::COURSE.into(), "Alchemy".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(field::COURSE),
            Some("'Alchemy' is not a valid course")
        );
    }

    #[test]
    fn test_age_fifteen_fails_sixteen_passes() {
        let engine = ValidationEngine::new(RuleSet::extended());

        let mut input = extended_input();
        input.insert(field::DATE_OF_BIRTH.into(), "2011-01-01".into());
        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(field::DATE_OF_BIRTH),
            Some("Student must be between 16 and 30 years old")
        );

        input.insert(field::DATE_OF_BIRTH.into(), "2010-01-01".into());
        assert!(engine.validate(&input, today()).is_ok());
    }

    #[test]
    fn test_age_check_ignores_month_and_day() {
        // Born late in the year, birthday not yet reached: the year
        // difference still counts as a full year.
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.insert(field::DATE_OF_BIRTH.into(), "2010-12-31".into());
        assert!(engine.validate(&input, today()).is_ok());
    }

    #[test]
    fn test_unparseable_date_fails_age_check() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.insert(field::DATE_OF_BIRTH.into(), "31/12/2005".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(field::DATE_OF_BIRTH),
            Some("Student must be between 16 and 30 years old")
        );
    }

    #[test]
    fn test_address_length_bounds() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let mut input = extended_input();
        input.insert(field::ADDRESS.into(), "Too short".into());

        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(
            errors.get(field::ADDRESS),
            Some("Address must be at least 10 characters")
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let engine = ValidationEngine::new(RuleSet::extended());
        let input = extended_input();
        let first = engine.validate(&input, today());
        for _ in 0..50 {
            assert_eq!(engine.validate(&input, today()), first);
        }
    }

    #[test]
    fn test_custom_rule_set() {
        // A one-field variant, to show the engine is fully parameterized.
        let rules = RuleSet::new(vec![FieldSpec::new(field::NAME, "Name")
            .filter(InputFilter::None)
            .required()
            .max_length(5)])
        .unwrap();
        let engine = ValidationEngine::new(rules);

        let mut input = FieldValues::new();
        input.insert(field::NAME.into(), "Waldo".into());
        assert!(engine.validate(&input, today()).is_ok());

        input.insert(field::NAME.into(), "Wilhelmina".into());
        let errors = engine.validate(&input, today()).unwrap_err();
        assert_eq!(errors.get(field::NAME), Some("Name must be under 5 characters"));
    }
}

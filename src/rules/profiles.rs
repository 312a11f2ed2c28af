//! Built-in rule-set profiles
//!
//! The shipped directory variants, expressed as configurations of the one
//! core:
//! - `strict`: basic field set, strict name charset, 10-digit phones
//! - `lenient`: basic field set, free-form names, international phones
//! - `extended`: full enrollment form with student id, date of birth,
//!   gender, course, and address

use super::filters::InputFilter;
use super::types::{FieldRule, FieldSpec, RuleSet};

/// Wire keys submitted by the form collaborator.
pub mod field {
    pub const STUDENT_ID: &str = "studentId";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const GENDER: &str = "gender";
    pub const COURSE: &str = "course";
    pub const ADDRESS: &str = "address";
    pub const PARENT_NAME: &str = "parentName";
    pub const PARENT_PHONE: &str = "parentPhone";
}

/// Allowed gender selections, in display order.
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Allowed course selections, in display order.
pub const COURSES: [&str; 10] = [
    "Computer Science",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "Business Administration",
    "Economics",
];

/// Letters, spaces, hyphens, and apostrophes.
pub const NAME_PATTERN: &str = r"[a-zA-Z\s'-]+";

/// Local part, `@`, domain with at least one dot.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Exactly ten digits.
pub const PHONE_STRICT_PATTERN: &str = r"\d{10}";

/// Optional leading `+`, then 2-15 digits.
pub const PHONE_LENIENT_PATTERN: &str = r"\+?\d{2,15}";

/// 4-12 uppercase letters or digits.
pub const STUDENT_ID_PATTERN: &str = r"[A-Z0-9]{4,12}";

const NAME_MESSAGE: &str = "Name can only contain letters, spaces, hyphens, and apostrophes";
const EMAIL_MESSAGE: &str = "Please enter a valid email address (e.g. john@school.edu)";
const STUDENT_ID_MESSAGE: &str = "Student ID must be 4-12 uppercase letters/digits (e.g. CS2024001)";

/// Phone strictness is variant configuration, not a hard-coded rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// Exactly 10 digits
    Strict,
    /// Optional leading `+`, 2-15 digits
    Lenient,
}

impl PhoneFormat {
    /// The unanchored pattern for this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            PhoneFormat::Strict => PHONE_STRICT_PATTERN,
            PhoneFormat::Lenient => PHONE_LENIENT_PATTERN,
        }
    }

    /// The failure message for this format.
    pub fn message(&self) -> &'static str {
        match self {
            PhoneFormat::Strict => "Phone must be exactly 10 digits (e.g. 9876543210)",
            PhoneFormat::Lenient => "Phone must be 2-15 digits with an optional leading +",
        }
    }

    /// The matching as-you-type filter.
    pub fn filter(&self) -> InputFilter {
        match self {
            PhoneFormat::Strict => InputFilter::Digits,
            PhoneFormat::Lenient => InputFilter::DialString,
        }
    }

    /// The pattern rule for this format.
    pub fn rule(&self) -> FieldRule {
        builtin(self.pattern(), self.message())
    }
}

// Built-in patterns are compile-time constants; a failure here is a bug in
// this module, not a caller error.
fn builtin(pattern: &str, message: &str) -> FieldRule {
    FieldRule::pattern(pattern, message).expect("built-in pattern compiles")
}

fn name_field(name: &str, label: &str, strict_charset: bool) -> FieldSpec {
    let spec = FieldSpec::new(name, label)
        .required()
        .min_length(2)
        .max_length(100);
    if strict_charset {
        spec.rule(builtin(NAME_PATTERN, NAME_MESSAGE))
    } else {
        spec
    }
}

fn email_field() -> FieldSpec {
    FieldSpec::new(field::EMAIL, "Email")
        .lowercased()
        .required()
        .max_length(255)
        .rule(builtin(EMAIL_PATTERN, EMAIL_MESSAGE))
}

fn phone_field(name: &str, label: &str, format: PhoneFormat) -> FieldSpec {
    FieldSpec::new(name, label)
        .filter(format.filter())
        .required()
        .rule(format.rule())
}

fn basic_fields(strict_names: bool, phone: PhoneFormat) -> Vec<FieldSpec> {
    vec![
        name_field(field::NAME, "Name", strict_names),
        email_field(),
        phone_field(field::PHONE, "Phone", phone),
        name_field(field::PARENT_NAME, "Parent name", strict_names),
        phone_field(field::PARENT_PHONE, "Parent phone", phone),
    ]
}

impl RuleSet {
    /// Basic field set with the strict rules: restricted name charset,
    /// 10-digit phones.
    pub fn strict() -> Self {
        RuleSet::new(basic_fields(true, PhoneFormat::Strict)).expect("built-in rule set is valid")
    }

    /// Basic field set with the lenient rules: free-form names,
    /// international phones.
    pub fn lenient() -> Self {
        RuleSet::new(basic_fields(false, PhoneFormat::Lenient)).expect("built-in rule set is valid")
    }

    /// Full enrollment form: strict rules plus student id, date of birth,
    /// gender, course, and address.
    pub fn extended() -> Self {
        let fields = vec![
            FieldSpec::new(field::STUDENT_ID, "Student ID")
                .filter(InputFilter::UpperAlphanumeric)
                .required()
                .rule(builtin(STUDENT_ID_PATTERN, STUDENT_ID_MESSAGE)),
            name_field(field::NAME, "Name", true),
            email_field(),
            phone_field(field::PHONE, "Phone", PhoneFormat::Strict),
            FieldSpec::new(field::DATE_OF_BIRTH, "Date of birth")
                .required()
                .age_between(16, 30),
            FieldSpec::new(field::GENDER, "Gender").one_of(GENDERS),
            FieldSpec::new(field::COURSE, "Course").one_of(COURSES),
            FieldSpec::new(field::ADDRESS, "Address")
                .required()
                .min_length(10)
                .max_length(300),
            name_field(field::PARENT_NAME, "Parent name", true),
            phone_field(field::PARENT_PHONE, "Parent phone", PhoneFormat::Strict),
        ];
        RuleSet::new(fields).expect("built-in rule set is valid")
    }
}

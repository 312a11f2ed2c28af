//! Input filters applied before validation
//!
//! The rendering layer runs these as the user types (phone boxes drop
//! letters, student-id boxes upper-case), and the engine runs them again
//! before any rule fires, so validation always sees sanitized text.

/// Per-field sanitizer, part of the declarative field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    /// Pass the input through untouched
    #[default]
    None,
    /// Keep ASCII digits only
    Digits,
    /// Keep an optional leading `+` followed by ASCII digits
    DialString,
    /// Keep ASCII alphanumerics, upper-cased
    UpperAlphanumeric,
}

impl InputFilter {
    /// Applies the filter to raw input.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            InputFilter::None => raw.to_string(),
            InputFilter::Digits => digits_only(raw),
            InputFilter::DialString => dial_string(raw),
            InputFilter::UpperAlphanumeric => upper_alphanumeric(raw),
        }
    }
}

/// Strips every character that is not an ASCII digit.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps ASCII digits plus a single `+` in the leading position.
pub fn dial_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Strips non-alphanumerics and upper-cases what remains.
pub fn upper_alphanumeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

//! Notification events for the toast collaborator
//!
//! Fired after every submit: success or validation failure, with an
//! optional message.

use std::fmt;

/// Kind of notification raised after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A record was added
    Success,
    /// The submission was rejected; the roster is unchanged
    ValidationFailure,
}

impl NotificationKind {
    /// Stable string form for log lines and event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::ValidationFailure => "validation-failure",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    message: Option<String>,
}

impl Notification {
    /// A success notification with a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: Some(message.into()),
        }
    }

    /// A validation-failure notification.
    pub fn validation_failure(message: Option<String>) -> Self {
        Self {
            kind: NotificationKind::ValidationFailure,
            message,
        }
    }

    /// The notification kind.
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// The optional message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strings() {
        assert_eq!(NotificationKind::Success.as_str(), "success");
        assert_eq!(
            NotificationKind::ValidationFailure.to_string(),
            "validation-failure"
        );
    }

    #[test]
    fn test_constructors() {
        let ok = Notification::success("Student added successfully!");
        assert_eq!(ok.kind(), NotificationKind::Success);
        assert_eq!(ok.message(), Some("Student added successfully!"));

        let bad = Notification::validation_failure(None);
        assert_eq!(bad.kind(), NotificationKind::ValidationFailure);
        assert_eq!(bad.message(), None);
    }
}

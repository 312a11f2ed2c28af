//! # Student Records
//!
//! The sole entity of the directory. A `StudentDraft` is a validated,
//! normalized record without an id; the store turns it into a `Student` at
//! insertion. Records are immutable once stored; editing is not supported.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rules::field;

/// Input format for date-of-birth values (HTML date inputs submit this).
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A stored student record.
///
/// Extended fields are collected by the full enrollment variant only; the
/// basic variants leave them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Unique record identifier, assigned at insertion, never reused
    pub id: Uuid,

    /// Institutional student id (extended variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Student's full name
    pub name: String,

    /// Email address, stored lower-cased
    pub email: String,

    /// Student phone, digits (plus an optional leading `+` in the lenient
    /// variant)
    pub phone: String,

    /// Date of birth (extended variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,

    /// Gender selection (extended variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Course selection (extended variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    /// Residential address (extended variant)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Parent or guardian name
    pub parent_name: String,

    /// Parent or guardian phone
    pub parent_phone: String,
}

/// A validated record awaiting an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub parent_name: String,
    pub parent_phone: String,
}

impl StudentDraft {
    /// Creates a draft with the basic field set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        parent_name: impl Into<String>,
        parent_phone: impl Into<String>,
    ) -> Self {
        Self {
            student_id: None,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            date_of_birth: None,
            gender: None,
            course: None,
            address: None,
            parent_name: parent_name.into(),
            parent_phone: parent_phone.into(),
        }
    }

    /// Sets the institutional student id.
    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Sets the date of birth.
    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the gender selection.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Sets the course selection.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Sets the residential address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builds a draft from the engine's normalized field values. Fields the
    /// rule set did not collect stay unset.
    pub(crate) fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let take = |name: &str| fields.get(name).cloned();
        Self {
            student_id: take(field::STUDENT_ID),
            name: take(field::NAME).unwrap_or_default(),
            email: take(field::EMAIL).unwrap_or_default(),
            phone: take(field::PHONE).unwrap_or_default(),
            date_of_birth: take(field::DATE_OF_BIRTH)
                .and_then(|v| NaiveDate::parse_from_str(&v, DATE_INPUT_FORMAT).ok()),
            gender: take(field::GENDER),
            course: take(field::COURSE),
            address: take(field::ADDRESS),
            parent_name: take(field::PARENT_NAME).unwrap_or_default(),
            parent_phone: take(field::PARENT_PHONE).unwrap_or_default(),
        }
    }

    /// Attaches an id, producing the stored record.
    pub(crate) fn into_student(self, id: Uuid) -> Student {
        Student {
            id,
            student_id: self.student_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            course: self.course,
            address: self.address,
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
        }
    }
}

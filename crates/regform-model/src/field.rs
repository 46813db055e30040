use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegformError;

/// Identifier of a registered form field.
///
/// The set is closed: the registration form binds to exactly these fields,
/// and the wire identifiers (`as_str`) match the names used in previously
/// persisted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Phone,
    StudentId,
    Course,
    Dob,
    Password,
    ConfirmPassword,
    Terms,
}

impl FieldId {
    /// Every registered field, in form order.
    pub const ALL: [FieldId; 9] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::StudentId,
        FieldId::Course,
        FieldId::Dob,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Terms,
    ];

    /// Returns the wire identifier as it appears in markup and stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::StudentId => "studentId",
            FieldId::Course => "course",
            FieldId::Dob => "dob",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Terms => "terms",
        }
    }

    /// Returns true for fields whose values must never reach persistent storage.
    pub fn is_sensitive(&self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }

    /// Returns true for fields that appear in a [`crate::StoredRecord`].
    pub fn is_persisted(&self) -> bool {
        matches!(
            self,
            FieldId::Name
                | FieldId::Email
                | FieldId::Phone
                | FieldId::StudentId
                | FieldId::Course
                | FieldId::Dob
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = RegformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(FieldId::Name),
            "email" => Ok(FieldId::Email),
            "phone" => Ok(FieldId::Phone),
            "studentId" => Ok(FieldId::StudentId),
            "course" => Ok(FieldId::Course),
            "dob" => Ok(FieldId::Dob),
            "password" => Ok(FieldId::Password),
            "confirmPassword" => Ok(FieldId::ConfirmPassword),
            "terms" => Ok(FieldId::Terms),
            other => Err(RegformError::UnknownField(other.to_string())),
        }
    }
}

/// The current value of a form field: free text for inputs and selects,
/// a flag for checkbox-like fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn flag(value: bool) -> Self {
        FieldValue::Flag(value)
    }

    /// The textual content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    /// Truthiness: a set flag, or non-blank text.
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => !text.trim().is_empty(),
        }
    }
}

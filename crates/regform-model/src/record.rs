use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::{FieldId, FieldValue};

/// Ephemeral capture of the form at submission time.
///
/// Built fresh on each submit attempt and discarded after producing the
/// [`StoredRecord`]; never serialized itself.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, FieldValue>,
    submitted_at: String,
}

impl FormSnapshot {
    pub fn new(values: BTreeMap<FieldId, FieldValue>, submitted_at: impl Into<String>) -> Self {
        Self {
            values,
            submitted_at: submitted_at.into(),
        }
    }

    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// The textual content of a field, or the empty string when the field is
    /// absent or not a text field.
    pub fn text(&self, field: FieldId) -> &str {
        self.value(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn submitted_at(&self) -> &str {
        &self.submitted_at
    }
}

/// Persisted registration record.
///
/// A [`FormSnapshot`] minus the sensitive fields: password values never reach
/// storage. Records are appended to an ordered sequence under a fixed storage
/// key; the wire format keeps the camelCase names of previously persisted
/// data (`studentId`, `submittedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub course: String,
    pub dob: String,
    pub submitted_at: String,
}

impl StoredRecord {
    /// Derive the persisted record from a snapshot, dropping sensitive fields.
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        Self {
            name: snapshot.text(FieldId::Name).to_string(),
            email: snapshot.text(FieldId::Email).to_string(),
            phone: snapshot.text(FieldId::Phone).to_string(),
            student_id: snapshot.text(FieldId::StudentId).to_string(),
            course: snapshot.text(FieldId::Course).to_string(),
            dob: snapshot.text(FieldId::Dob).to_string(),
            submitted_at: snapshot.submitted_at().to_string(),
        }
    }

    /// Parse a serialized record sequence.
    pub fn decode_sequence(raw: &str) -> Result<Vec<StoredRecord>> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Serialize a record sequence for the storage blob.
    pub fn encode_sequence(records: &[StoredRecord]) -> Result<String> {
        Ok(serde_json::to_string(records)?)
    }
}

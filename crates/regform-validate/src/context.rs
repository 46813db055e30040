use std::collections::BTreeMap;

use regform_model::{FieldId, FieldValue};

/// Read-only access to the live values of sibling fields.
///
/// Cross-field rules evaluate against whatever the sibling holds *now*, not a
/// value captured when the rule's own field was last edited.
pub trait FieldLookup {
    fn value(&self, field: FieldId) -> Option<FieldValue>;
}

impl FieldLookup for BTreeMap<FieldId, FieldValue> {
    fn value(&self, field: FieldId) -> Option<FieldValue> {
        self.get(&field).cloned()
    }
}

/// Evaluation context handed to every rule.
pub struct RuleContext<'a> {
    /// Live sibling field values.
    pub fields: &'a dyn FieldLookup,
    /// Clock-derived calendar year used by the age check.
    pub current_year: i32,
}

impl<'a> RuleContext<'a> {
    pub fn new(fields: &'a dyn FieldLookup, current_year: i32) -> Self {
        Self {
            fields,
            current_year,
        }
    }

    /// The text of a sibling field, empty when absent or not a text field.
    pub(crate) fn sibling_text(&self, field: FieldId) -> String {
        self.fields
            .value(field)
            .and_then(|value| value.as_text().map(str::to_owned))
            .unwrap_or_default()
    }
}

use std::collections::BTreeMap;

use regform_model::{FieldId, FieldValue, ValidationResult};

use crate::context::RuleContext;
use crate::engine;

/// The predicate half of a [`FieldRule`].
///
/// Checks are data interpreted by the engine; the cross-field variants read
/// sibling values through the [`RuleContext`] at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Trimmed character count must be at least the given minimum.
    MinTrimmedLen(usize),
    /// Must match a standard `local@domain.tld` shape.
    Email,
    /// Exactly 10 digits after stripping separators, excluding known weak
    /// patterns (ascending/descending runs, one digit repeated).
    Phone,
    /// A non-empty, non-placeholder selection.
    NonEmptyChoice,
    /// Calendar-year age must fall inside the inclusive range.
    ///
    /// Deliberately ignores month and day: a birthday later this year counts
    /// as already passed. Accepted approximation, kept to match the observed
    /// behavior of previously registered data.
    AgeInRange { min: i32, max: i32 },
    /// Password policy: length, not the literal "password", must not contain
    /// the entered name, and needs a letter, a digit and a symbol.
    Password,
    /// Non-empty and equal to the live value of another field.
    MatchesField(FieldId),
    /// A checkbox-style flag that must be set.
    Accepted,
}

/// One declarative rule: a field, a predicate and the message shown when the
/// predicate fails. Immutable once the table is built.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: FieldId,
    pub check: Check,
    pub message: &'static str,
}

/// The rule table for the registration form: one rule per validated field.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: BTreeMap<FieldId, FieldRule>,
}

impl RuleTable {
    /// The registration rule set.
    pub fn registration() -> Self {
        let rules = [
            FieldRule {
                field: FieldId::Name,
                check: Check::MinTrimmedLen(5),
                message: "Name must be at least 5 characters long",
            },
            FieldRule {
                field: FieldId::Email,
                check: Check::Email,
                message: "Please enter a valid email address",
            },
            FieldRule {
                field: FieldId::Phone,
                check: Check::Phone,
                message: "Phone number must be 10 digits",
            },
            FieldRule {
                field: FieldId::StudentId,
                check: Check::MinTrimmedLen(4),
                message: "Student ID must be at least 4 characters",
            },
            FieldRule {
                field: FieldId::Course,
                check: Check::NonEmptyChoice,
                message: "Please select a course",
            },
            FieldRule {
                field: FieldId::Dob,
                check: Check::AgeInRange { min: 16, max: 100 },
                message: "Age must be between 16 and 100 years",
            },
            FieldRule {
                field: FieldId::Password,
                check: Check::Password,
                message: "Password must be 8+ chars with a letter, number and symbol, \
                          and must not contain your name",
            },
            FieldRule {
                field: FieldId::ConfirmPassword,
                check: Check::MatchesField(FieldId::Password),
                message: "Passwords do not match",
            },
            FieldRule {
                field: FieldId::Terms,
                check: Check::Accepted,
                message: "You must agree to the terms and conditions",
            },
        ];
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.field, rule))
                .collect(),
        }
    }

    /// The rule registered for a field, if any.
    pub fn rule(&self, field: FieldId) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    /// Evaluate a field's rule against a value.
    ///
    /// Pure apart from reads through the context; a field with no registered
    /// rule is vacuously valid.
    pub fn evaluate(
        &self,
        field: FieldId,
        value: &FieldValue,
        ctx: &RuleContext<'_>,
    ) -> ValidationResult {
        let Some(rule) = self.rule(field) else {
            return ValidationResult::pass();
        };
        if engine::run_check(&rule.check, value, ctx) {
            ValidationResult::pass()
        } else {
            ValidationResult::fail(rule.message)
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::registration()
    }
}

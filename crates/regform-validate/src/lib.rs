//! Declarative validation rules for the student registration form.
//!
//! Rules are plain data (a [`Check`] plus an error message) interpreted by the
//! engine, not scattered conditionals: each rule is independently addressable
//! and testable. Cross-field checks (confirm-password against password,
//! password against the entered name) read sibling values only through the
//! read-only [`FieldLookup`] in the [`RuleContext`], so rules stay pure.

mod checks;
mod context;
mod engine;
mod rules;
mod strength;

pub use context::{FieldLookup, RuleContext};
pub use rules::{Check, FieldRule, RuleTable};
pub use strength::{Strength, classify_password, score_password};

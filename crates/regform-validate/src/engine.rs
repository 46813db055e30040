//! Interpreter for [`Check`] predicates.

use regform_model::{FieldId, FieldValue};

use crate::checks;
use crate::context::RuleContext;
use crate::rules::Check;

/// Run a single check against a field value.
///
/// Text checks treat a checkbox value as empty text rather than panicking;
/// the table never pairs them that way, but the engine stays total.
pub(crate) fn run_check(check: &Check, value: &FieldValue, ctx: &RuleContext<'_>) -> bool {
    let text = value.as_text().unwrap_or_default();
    match check {
        Check::MinTrimmedLen(min) => checks::min_trimmed_len(text, *min),
        Check::Email => checks::is_valid_email(text),
        Check::Phone => checks::is_valid_phone(text),
        Check::NonEmptyChoice => !text.trim().is_empty(),
        Check::AgeInRange { min, max } => {
            checks::age_in_range(text, *min, *max, ctx.current_year)
        }
        Check::Password => {
            let name = ctx.sibling_text(FieldId::Name);
            checks::is_acceptable_password(text, &name)
        }
        Check::MatchesField(other) => {
            !text.is_empty() && text == ctx.sibling_text(*other)
        }
        Check::Accepted => value.is_set(),
    }
}

//! Predicate implementations behind the [`crate::Check`] variants.

use chrono::{Datelike, NaiveDate};

/// Symbols accepted by the password policy and the strength scorer.
pub(crate) const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?\\|`~";

pub(crate) fn min_trimmed_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Standard `local@domain.tld` shape, no whitespace and exactly one `@`.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if !trimmed.contains('@') {
        return false;
    }
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|r| r.is_match(trimmed))
        .unwrap_or(false)
}

/// Exactly 10 digits after stripping separators, excluding known weak
/// patterns: the ascending run, the descending runs, and a single digit
/// repeated ten times.
pub(crate) fn is_valid_phone(value: &str) -> bool {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.chars().count() != 10 {
        return false;
    }
    if matches!(digits.as_str(), "1234567890" | "0123456789" | "9876543210") {
        return false;
    }
    let mut chars = digits.chars();
    let first = chars.next().unwrap_or_default();
    if chars.all(|ch| ch == first) {
        return false;
    }
    true
}

/// Calendar-year age check: `current_year - birth_year` inside `[min, max]`.
/// An unparseable date of birth fails the check.
pub(crate) fn age_in_range(value: &str, min: i32, max: i32, current_year: i32) -> bool {
    let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") else {
        return false;
    };
    let age = current_year - date.year();
    age >= min && age <= max
}

/// Password policy: at least 8 characters; case-insensitively not the
/// literal "password"; must not contain the entered name (when one has been
/// entered); and needs a letter, a digit and a symbol.
pub(crate) fn is_acceptable_password(value: &str, name: &str) -> bool {
    if value.chars().count() < 8 {
        return false;
    }
    let lowered = value.to_lowercase();
    if lowered == "password" {
        return false;
    }
    let name = name.trim();
    if !name.is_empty() && lowered.contains(&name.to_lowercase()) {
        return false;
    }
    let has_letter = value.chars().any(|ch| ch.is_ascii_alphabetic());
    let has_digit = value.chars().any(|ch| ch.is_ascii_digit());
    let has_symbol = value.chars().any(|ch| PASSWORD_SYMBOLS.contains(ch));
    has_letter && has_digit && has_symbol
}

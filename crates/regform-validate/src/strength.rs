//! Display-only password strength scoring.
//!
//! The score never gates validation; it only drives the strength indicator
//! shown while the user types.

use crate::checks::PASSWORD_SYMBOLS;

/// Five-level strength class mapped from the 0-4 score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    #[default]
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Strength::None,
            1 => Strength::Weak,
            2 => Strength::Fair,
            3 => Strength::Good,
            _ => Strength::Strong,
        }
    }

    /// Indicator class name shown in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::None => "none",
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
        }
    }
}

/// Sum of four independent checks: length, mixed case, a digit, a symbol.
pub fn score_password(password: &str) -> u8 {
    let mut score = 0u8;
    if password.chars().count() >= 8 {
        score += 1;
    }
    let has_lower = password.chars().any(|ch| ch.is_ascii_lowercase());
    let has_upper = password.chars().any(|ch| ch.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 1;
    }
    if password.chars().any(|ch| ch.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|ch| PASSWORD_SYMBOLS.contains(ch)) {
        score += 1;
    }
    score
}

/// Score a password and map it onto its strength class.
pub fn classify_password(password: &str) -> Strength {
    Strength::from_score(score_password(password))
}

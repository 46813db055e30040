/// Per-field validation outcome.
///
/// Derived on every validation trigger and never stored; `message` carries
/// the rule's configured error text when the field is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

use regform_model::FieldId;

use crate::ports::TimerId;

/// Events delivered by the UI event source.
///
/// The controller subscribes once at startup and handles each event to
/// completion before the next one is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Focus left a field.
    Blur(FieldId),
    /// A field's committed value changed.
    Change(FieldId),
    /// Focus entered a field.
    Focus(FieldId),
    /// A keystroke in a field.
    Input(FieldId),
    /// The form was submitted.
    Submit,
    /// A scheduled timer fired.
    TimerFired(TimerId),
}

//! Injectable ports: the UI surface, the storage blob, the clock and the
//! timer scheduler. Tests substitute in-memory fakes for all of them.

use std::time::Duration;

use chrono::{DateTime, Utc};

use regform_model::FieldId;
use regform_validate::{FieldLookup, Strength};

/// Visual validity marker for a field.
///
/// `Untouched -> {Valid, Invalid}` on the first validation trigger,
/// `Valid <-> Invalid` afterwards, back to `Untouched` on form reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// Handle for a scheduled timer callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// The UI surface the controller drives.
///
/// Reading field values comes from the [`FieldLookup`] supertrait so the
/// same accessor doubles as the sibling lookup handed to cross-field rules.
pub trait FieldAccessor: FieldLookup {
    /// Set the visual validity marker next to a field.
    fn set_marker(&mut self, field: FieldId, marker: Marker);
    /// Show an error message in the slot adjacent to a field.
    fn set_message(&mut self, field: FieldId, message: &str);
    /// Clear the message slot adjacent to a field.
    fn clear_message(&mut self, field: FieldId);
    /// Show the success notification.
    fn show_success(&mut self, text: &str);
    /// Hide the success notification.
    fn hide_success(&mut self);
    /// Update the password strength indicator; `Strength::None` clears it.
    fn set_strength(&mut self, strength: Strength);
    /// Reset every field to its initial empty value, clear all messages and
    /// return all markers to `Untouched`.
    fn reset(&mut self);
}

/// Opaque key-value blob store with read-full/write-full semantics.
pub trait StorageBlob {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Time source for submission timestamps and the age check's current year.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deferred callback scheduling.
///
/// The host delivers fires back as [`crate::UiEvent::TimerFired`] events;
/// cancellation works by generation matching, so a stale id is simply
/// ignored when it fires.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId;
}

//! Form controller for the student registration form.
//!
//! The controller is a thin event-wiring layer over the declarative rule
//! table: UI events come in through [`UiEvent`], the controller consults the
//! rules and mutates a small amount of UI and storage state through its
//! injected ports. Single-threaded, run-to-completion; the only deferred
//! work is the success-message auto-hide timer.

mod controller;
mod events;
mod ports;
mod store;

pub use controller::{FormController, SUCCESS_VISIBLE};
pub use events::UiEvent;
pub use ports::{Clock, FieldAccessor, Marker, Scheduler, StorageBlob, SystemClock, TimerId};
pub use store::{STORAGE_KEY, load_records};

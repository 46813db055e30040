use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Datelike;
use tracing::{debug, warn};

use regform_model::{FieldId, FormSnapshot, StoredRecord};
use regform_validate::{RuleContext, RuleTable, Strength, classify_password};

use crate::events::UiEvent;
use crate::ports::{Clock, FieldAccessor, Marker, Scheduler, StorageBlob, TimerId};
use crate::store;

/// How long the success notification stays visible before auto-hiding.
pub const SUCCESS_VISIBLE: Duration = Duration::from_secs(3);

/// Orchestrates per-field validation, whole-form validation and the
/// submit/reset lifecycle over the injected ports.
pub struct FormController<A, S, C, T>
where
    A: FieldAccessor,
    S: StorageBlob,
    C: Clock,
    T: Scheduler,
{
    form: A,
    storage: S,
    clock: C,
    scheduler: T,
    rules: RuleTable,
    pending_hide: Option<TimerId>,
}

impl<A, S, C, T> FormController<A, S, C, T>
where
    A: FieldAccessor,
    S: StorageBlob,
    C: Clock,
    T: Scheduler,
{
    pub fn new(form: A, storage: S, clock: C, scheduler: T) -> Self {
        Self {
            form,
            storage,
            clock,
            scheduler,
            rules: RuleTable::registration(),
            pending_hide: None,
        }
    }

    /// Dispatch one UI event to completion.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Blur(field) | UiEvent::Change(field) => {
                self.validate_field(field);
            }
            // Clear the message optimistically while the user is editing;
            // no re-validation, to avoid flicker.
            UiEvent::Focus(field) => self.form.clear_message(field),
            UiEvent::Input(FieldId::Password) => self.refresh_strength(),
            // The confirm field depends on a sibling that may have changed
            // since it was last validated, so it gets per-keystroke feedback.
            UiEvent::Input(FieldId::ConfirmPassword) => {
                self.validate_field(FieldId::ConfirmPassword);
            }
            UiEvent::Input(_) => {}
            UiEvent::Submit => self.submit(),
            UiEvent::TimerFired(id) => self.on_timer(id),
        }
    }

    /// Validate one field against its rule and update its message slot and
    /// visual marker. Fields with no rule, and fields whose value cannot be
    /// looked up, are vacuously valid (fail-open).
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        if self.rules.rule(field).is_none() {
            return true;
        }
        let Some(value) = self.form.value(field) else {
            return true;
        };
        let result = {
            let ctx = RuleContext::new(&self.form, self.clock.now().year());
            self.rules.evaluate(field, &value, &ctx)
        };
        if result.valid {
            self.form.clear_message(field);
            self.form.set_marker(field, Marker::Valid);
        } else {
            self.form
                .set_message(field, result.message.as_deref().unwrap_or_default());
            self.form.set_marker(field, Marker::Invalid);
        }
        result.valid
    }

    /// Validate every registered field. Evaluates all of them, with no
    /// short-circuit, so every invalid field's message is populated before
    /// the aggregate result is inspected.
    pub fn validate_form(&mut self) -> bool {
        let mut all_valid = true;
        for field in FieldId::ALL {
            if !self.validate_field(field) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Run the submission lifecycle: collect, validate, persist, notify,
    /// reset. An invalid form aborts before any persistence, leaving the
    /// per-field messages visible.
    pub fn submit(&mut self) {
        if !self.validate_form() {
            warn!("form has validation errors");
            return;
        }

        let snapshot = self.capture_snapshot();
        let record = StoredRecord::from_snapshot(&snapshot);
        debug!(name = %record.name, submitted_at = %record.submitted_at, "form submitted");
        store::append_record(&mut self.storage, record.clone());

        let text = format!(
            "Thank you {}! Your registration has been submitted.",
            record.name
        );
        self.form.show_success(&text);
        self.pending_hide = Some(self.scheduler.schedule(SUCCESS_VISIBLE));

        self.form.reset();
        self.form.set_strength(Strength::None);
    }

    /// Capture the current field values plus a submission timestamp.
    fn capture_snapshot(&self) -> FormSnapshot {
        let mut values = BTreeMap::new();
        for field in FieldId::ALL {
            if let Some(value) = self.form.value(field) {
                values.insert(field, value);
            }
        }
        FormSnapshot::new(values, self.clock.now().to_rfc3339())
    }

    fn refresh_strength(&mut self) {
        let password = self
            .form
            .value(FieldId::Password)
            .and_then(|value| value.as_text().map(str::to_owned))
            .unwrap_or_default();
        self.form.set_strength(classify_password(&password));
    }

    /// Hide the success notification when the matching timer fires; a stale
    /// id from a superseded submission is ignored.
    fn on_timer(&mut self, id: TimerId) {
        if self.pending_hide == Some(id) {
            self.pending_hide = None;
            self.form.hide_success();
        }
    }

    pub fn form(&self) -> &A {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut A {
        &mut self.form
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }
}

//! Controller lifecycle tests against in-memory fakes for every port.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use regform_core::{
    Clock, FieldAccessor, FormController, Marker, STORAGE_KEY, SUCCESS_VISIBLE, Scheduler,
    StorageBlob, TimerId, UiEvent, load_records,
};
use regform_model::{FieldId, FieldValue, StoredRecord};
use regform_validate::{FieldLookup, Strength};

#[derive(Debug, Default)]
struct FakeForm {
    values: BTreeMap<FieldId, FieldValue>,
    messages: BTreeMap<FieldId, String>,
    markers: BTreeMap<FieldId, Marker>,
    success: Option<String>,
    strength: Strength,
    resets: usize,
}

impl FakeForm {
    fn put(&mut self, field: FieldId, value: FieldValue) {
        self.values.insert(field, value);
    }

    fn message(&self, field: FieldId) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    fn marker(&self, field: FieldId) -> Marker {
        self.markers.get(&field).copied().unwrap_or_default()
    }
}

impl FieldLookup for FakeForm {
    fn value(&self, field: FieldId) -> Option<FieldValue> {
        self.values.get(&field).cloned()
    }
}

impl FieldAccessor for FakeForm {
    fn set_marker(&mut self, field: FieldId, marker: Marker) {
        self.markers.insert(field, marker);
    }

    fn set_message(&mut self, field: FieldId, message: &str) {
        self.messages.insert(field, message.to_string());
    }

    fn clear_message(&mut self, field: FieldId) {
        self.messages.remove(&field);
    }

    fn show_success(&mut self, text: &str) {
        self.success = Some(text.to_string());
    }

    fn hide_success(&mut self) {
        self.success = None;
    }

    fn set_strength(&mut self, strength: Strength) {
        self.strength = strength;
    }

    fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = match value {
                FieldValue::Text(_) => FieldValue::text(""),
                FieldValue::Flag(_) => FieldValue::flag(false),
            };
        }
        self.messages.clear();
        self.markers.clear();
        self.resets += 1;
    }
}

#[derive(Debug, Default)]
struct FakeStorage {
    blobs: BTreeMap<String, String>,
}

impl StorageBlob for FakeStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.blobs.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy)]
struct FakeClock(DateTime<Utc>);

impl Default for FakeClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 8, 27, 10, 15, 0).unwrap())
    }
}

impl Clock for FakeClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Default)]
struct FakeScheduler {
    next: u64,
    scheduled: Vec<(TimerId, Duration)>,
}

impl Scheduler for FakeScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;
        self.scheduled.push((id, delay));
        id
    }
}

type Controller = FormController<FakeForm, FakeStorage, FakeClock, FakeScheduler>;

fn controller() -> Controller {
    FormController::new(
        FakeForm::default(),
        FakeStorage::default(),
        FakeClock::default(),
        FakeScheduler::default(),
    )
}

fn fill_valid(form: &mut FakeForm) {
    form.put(FieldId::Name, FieldValue::text("Jordan Lee"));
    form.put(FieldId::Email, FieldValue::text("jordan.lee@example.edu"));
    form.put(FieldId::Phone, FieldValue::text("(555) 867-5309"));
    form.put(FieldId::StudentId, FieldValue::text("S10234"));
    form.put(FieldId::Course, FieldValue::text("Computer Science"));
    form.put(FieldId::Dob, FieldValue::text("2004-05-14"));
    form.put(FieldId::Password, FieldValue::text("Str0ng!pass"));
    form.put(FieldId::ConfirmPassword, FieldValue::text("Str0ng!pass"));
    form.put(FieldId::Terms, FieldValue::flag(true));
}

fn stored_records(ctl: &Controller) -> Vec<StoredRecord> {
    load_records(ctl.storage())
}

#[test]
fn blur_on_invalid_field_shows_message_and_marker() {
    let mut ctl = controller();
    ctl.form_mut().put(FieldId::Name, FieldValue::text("Al"));

    ctl.handle_event(UiEvent::Blur(FieldId::Name));

    assert_eq!(
        ctl.form().message(FieldId::Name),
        Some("Name must be at least 5 characters long")
    );
    assert_eq!(ctl.form().marker(FieldId::Name), Marker::Invalid);
}

#[test]
fn validation_is_idempotent_without_a_value_change() {
    let mut ctl = controller();
    ctl.form_mut().put(FieldId::Name, FieldValue::text("Al"));

    assert!(!ctl.validate_field(FieldId::Name));
    let first = ctl.form().message(FieldId::Name).map(str::to_owned);
    assert!(!ctl.validate_field(FieldId::Name));
    assert_eq!(ctl.form().message(FieldId::Name), first.as_deref());
}

#[test]
fn change_to_a_valid_value_clears_message_and_marks_valid() {
    let mut ctl = controller();
    ctl.form_mut().put(FieldId::Name, FieldValue::text("Al"));
    ctl.handle_event(UiEvent::Blur(FieldId::Name));

    ctl.form_mut().put(FieldId::Name, FieldValue::text("Alison"));
    ctl.handle_event(UiEvent::Change(FieldId::Name));

    assert_eq!(ctl.form().message(FieldId::Name), None);
    assert_eq!(ctl.form().marker(FieldId::Name), Marker::Valid);
}

#[test]
fn focus_clears_message_without_revalidating() {
    let mut ctl = controller();
    ctl.form_mut().put(FieldId::Name, FieldValue::text("Al"));
    ctl.handle_event(UiEvent::Blur(FieldId::Name));
    assert!(ctl.form().message(FieldId::Name).is_some());

    ctl.handle_event(UiEvent::Focus(FieldId::Name));

    assert_eq!(ctl.form().message(FieldId::Name), None);
    // The marker is untouched by focus; only the message is cleared.
    assert_eq!(ctl.form().marker(FieldId::Name), Marker::Invalid);
}

#[test]
fn missing_field_value_is_vacuously_valid() {
    let mut ctl = controller();
    // No value registered for any field: the lookup fails open.
    assert!(ctl.validate_field(FieldId::Name));
    assert_eq!(ctl.form().marker(FieldId::Name), Marker::Untouched);
    assert_eq!(ctl.form().message(FieldId::Name), None);
}

#[test]
fn validate_form_populates_every_invalid_message() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());
    ctl.form_mut().put(FieldId::Name, FieldValue::text("Al"));
    ctl.form_mut().put(FieldId::Course, FieldValue::text(""));

    assert!(!ctl.validate_form());

    // No short-circuit: both invalid fields carry their message.
    assert!(ctl.form().message(FieldId::Name).is_some());
    assert!(ctl.form().message(FieldId::Course).is_some());
    assert_eq!(ctl.form().marker(FieldId::Email), Marker::Valid);
}

#[test]
fn password_input_updates_the_strength_indicator() {
    let mut ctl = controller();
    ctl.form_mut().put(FieldId::Password, FieldValue::text("abc"));
    ctl.handle_event(UiEvent::Input(FieldId::Password));
    assert_eq!(ctl.form().strength, Strength::None);

    ctl.form_mut()
        .put(FieldId::Password, FieldValue::text("Str0ng!pass"));
    ctl.handle_event(UiEvent::Input(FieldId::Password));
    assert_eq!(ctl.form().strength, Strength::Strong);
}

#[test]
fn confirm_password_revalidates_against_the_live_password() {
    let mut ctl = controller();
    ctl.form_mut()
        .put(FieldId::ConfirmPassword, FieldValue::text("Str0ng!pass"));
    ctl.form_mut().put(FieldId::Password, FieldValue::text(""));

    // Confirm typed before the password was finalized.
    ctl.handle_event(UiEvent::Input(FieldId::ConfirmPassword));
    assert_eq!(ctl.form().marker(FieldId::ConfirmPassword), Marker::Invalid);

    // Password catches up; the next confirm keystroke sees the live value.
    ctl.form_mut()
        .put(FieldId::Password, FieldValue::text("Str0ng!pass"));
    ctl.handle_event(UiEvent::Input(FieldId::ConfirmPassword));
    assert_eq!(ctl.form().marker(FieldId::ConfirmPassword), Marker::Valid);
    assert_eq!(ctl.form().message(FieldId::ConfirmPassword), None);
}

#[test]
fn valid_submission_appends_one_record_and_resets() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());

    ctl.handle_event(UiEvent::Submit);

    let records = stored_records(&ctl);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Jordan Lee");
    assert_eq!(records[0].student_id, "S10234");
    assert!(!records[0].submitted_at.is_empty());

    let raw = ctl.storage().get(STORAGE_KEY).expect("blob written");
    assert!(!raw.contains("password"));
    assert!(!raw.contains("Str0ng!pass"));

    let success = ctl.form().success.as_deref().expect("success shown");
    assert!(success.contains("Jordan Lee"));

    assert_eq!(ctl.form().resets, 1);
    assert_eq!(ctl.form().strength, Strength::None);
    assert_eq!(ctl.form().marker(FieldId::Name), Marker::Untouched);
    assert_eq!(
        ctl.form().value(FieldId::Name),
        Some(FieldValue::text(""))
    );
}

#[test]
fn success_notification_auto_hides_when_its_timer_fires() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());
    ctl.handle_event(UiEvent::Submit);

    let (id, delay) = *ctl
        .scheduler()
        .scheduled
        .last()
        .expect("hide timer scheduled");
    assert_eq!(delay, SUCCESS_VISIBLE);
    assert!(ctl.form().success.is_some());

    ctl.handle_event(UiEvent::TimerFired(id));
    assert_eq!(ctl.form().success, None);
}

#[test]
fn stale_hide_timer_is_ignored() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());
    ctl.handle_event(UiEvent::Submit);
    let first = ctl.scheduler().scheduled[0].0;

    // A second submission supersedes the first hide timer.
    fill_valid(ctl.form_mut());
    ctl.handle_event(UiEvent::Submit);
    let second = ctl.scheduler().scheduled[1].0;

    ctl.handle_event(UiEvent::TimerFired(first));
    assert!(ctl.form().success.is_some(), "stale timer must not hide");

    ctl.handle_event(UiEvent::TimerFired(second));
    assert_eq!(ctl.form().success, None);
}

#[test]
fn invalid_submission_persists_nothing_and_shows_no_success() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());
    ctl.form_mut().put(FieldId::Phone, FieldValue::text("1234567890"));

    ctl.handle_event(UiEvent::Submit);

    assert!(stored_records(&ctl).is_empty());
    assert!(ctl.storage().get(STORAGE_KEY).is_none());
    assert_eq!(ctl.form().success, None);
    assert!(ctl.form().message(FieldId::Phone).is_some());
    assert_eq!(ctl.form().resets, 0);
}

#[test]
fn submissions_append_in_order() {
    let mut ctl = controller();
    fill_valid(ctl.form_mut());
    ctl.handle_event(UiEvent::Submit);

    fill_valid(ctl.form_mut());
    ctl.form_mut()
        .put(FieldId::Name, FieldValue::text("Avery Park"));
    ctl.handle_event(UiEvent::Submit);

    let records = stored_records(&ctl);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Jordan Lee");
    assert_eq!(records[1].name, "Avery Park");
}

#[test]
fn corrupt_stored_sequence_degrades_to_a_fresh_one() {
    let mut ctl = controller();
    ctl.storage_mut().set(STORAGE_KEY, "definitely not json");
    fill_valid(ctl.form_mut());

    ctl.handle_event(UiEvent::Submit);

    let records = stored_records(&ctl);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Jordan Lee");
    assert!(ctl.form().success.is_some());
}

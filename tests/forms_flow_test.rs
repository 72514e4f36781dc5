//! End-to-end form flows driven by key presses and clicks.

mod common;

use common::{press, render_text, type_text, TestAppBuilder};
use crossterm::event::KeyCode;
use hrm::app::View;
use hrm::error::FormError;
use hrm::forms::{EditSession, FormController};
use hrm::models::{EntityKind, Gender};
use hrm::ui::interaction::{handle_click_action, ClickAction};

#[test]
fn test_add_patient_with_keyboard() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.open_form_kind(), Some(EntityKind::Patient));
    assert_eq!(app.patient_form.title(), "Add Patient");

    type_text(&mut app, "Carol White");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "52");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "5551234");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Hypertension");
    press(&mut app, KeyCode::Enter);

    assert!(!app.has_modal());
    let carol = app.store.patients.find(3).unwrap();
    assert_eq!(carol.name, "Carol White");
    assert_eq!(carol.age, 52);
    assert_eq!(carol.gender, Gender::Female);
    assert_eq!(carol.history, "Hypertension");
    assert_eq!(app.selected_index(EntityKind::Patient), 2);
}

#[test]
fn test_typing_q_in_form_does_not_quit() {
    let mut app = TestAppBuilder::new().view(View::Doctors).build();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Dr. Quinn");

    assert!(!app.should_quit);
    assert_eq!(app.doctor_form.state().text(0), "Dr. Quinn");
}

#[test]
fn test_invalid_age_keeps_form_open() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Bob");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "abc");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "555");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.open_form_kind(), Some(EntityKind::Patient));
    assert_eq!(app.store.counts().patients, 2);
    let state = app.patient_form.state();
    assert_eq!(state.focus, 1);
    assert!(matches!(state.error, Some(FormError::InvalidNumber { .. })));

    let text = render_text(&mut app);
    assert!(text.contains("Age must be a whole number"));
}

#[test]
fn test_missing_name_is_required() {
    let mut app = TestAppBuilder::new().view(View::Doctors).build();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.doctor_form.state().error,
        Some(FormError::Required { field: "Name" })
    );
}

#[test]
fn test_edit_doctor_prefills_and_merges() {
    let mut app = TestAppBuilder::new().view(View::Doctors).build();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));

    assert_eq!(app.doctor_form.session(), EditSession::Editing(2));
    assert_eq!(app.doctor_form.title(), "Edit Doctor");
    assert_eq!(app.doctor_form.state().text(0), "Dr. Robert Green");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    for _ in 0.."4567890123".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "999");
    press(&mut app, KeyCode::Enter);

    let doctor = app.store.doctors.find(2).unwrap();
    assert_eq!(doctor.contact, "999");
    assert_eq!(doctor.name, "Dr. Robert Green");
    assert_eq!(doctor.specialty, "Orthopedics");
    assert_eq!(app.store.counts().doctors, 2);
}

#[test]
fn test_escape_discards_changes() {
    let mut app = TestAppBuilder::new().view(View::Doctors).build();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, " Jr.");
    press(&mut app, KeyCode::Esc);

    assert!(!app.has_modal());
    assert_eq!(app.store.doctors.find(1).unwrap().name, "Dr. Alice Brown");
}

#[test]
fn test_backdrop_click_closes_without_saving() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Ghost");

    handle_click_action(&mut app, ClickAction::DismissModal);

    assert!(!app.has_modal());
    assert_eq!(app.store.counts().patients, 2);

    // Reopening starts from empty fields.
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.patient_form.state().text(0), "");
}

#[test]
fn test_click_inside_dialog_keeps_it_open() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();
    press(&mut app, KeyCode::Char('a'));
    render_text(&mut app);

    let body = app
        .hit_registry
        .areas()
        .iter()
        .find(|area| area.action == ClickAction::ModalBody)
        .map(|area| area.rect)
        .unwrap();
    // Top border of the dialog: inside the body, outside every field.
    let action = app.hit_registry.hit_test(body.x + 1, body.y).unwrap();
    handle_click_action(&mut app, action);

    assert_eq!(app.open_form_kind(), Some(EntityKind::Patient));
}

#[test]
fn test_appointment_requires_picking_patient() {
    let mut app = TestAppBuilder::new().view(View::Appointments).build();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.appointment_form.title(), "Schedule Appointment");
    assert_eq!(app.appointment_form.patient_options(), ["abdul", "Jane Smith"]);

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.appointment_form.state().error,
        Some(FormError::NothingSelected { field: "Patient" })
    );
    assert!(render_text(&mut app).contains("Select a Patient"));
}

#[test]
fn test_schedule_appointment() {
    let mut app = TestAppBuilder::new().view(View::Appointments).build();
    press(&mut app, KeyCode::Char('a'));

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2025-11-02");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "09:15");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Follow-up");
    press(&mut app, KeyCode::Enter);

    let appointment = app.store.appointments.find(3).unwrap();
    assert_eq!(appointment.patient, "Jane Smith");
    assert_eq!(appointment.doctor, "Dr. Robert Green");
    assert_eq!(appointment.date.to_string(), "2025-11-02");
    assert_eq!(appointment.time.to_string(), "09:15:00");
    assert_eq!(app.dashboard().upcoming_count, 3);
}

#[test]
fn test_bad_time_points_at_time_field() {
    let mut app = TestAppBuilder::new().view(View::Appointments).build();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "2025-11-02");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "9am");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Rash");
    press(&mut app, KeyCode::Enter);

    let state = app.appointment_form.state();
    assert_eq!(state.focus, 3);
    assert!(matches!(state.error, Some(FormError::InvalidTime { .. })));
    assert_eq!(app.store.counts().appointments, 2);
}

#[test]
fn test_pickers_follow_store_at_open_time() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.store.counts().patients, 1);

    app.switch_view(View::Appointments);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.appointment_form.patient_options(), ["Jane Smith"]);
}

#[test]
fn test_edit_appointment_with_missing_patient_leaves_picker_empty() {
    let mut app = TestAppBuilder::new().view(View::Appointments).build();
    press(&mut app, KeyCode::Char('e'));

    // "John Doe" is not a patient in the store.
    let state = app.appointment_form.state();
    assert_eq!(state.fields[0].display_value(), "");
    assert_eq!(state.fields[1].display_value(), "Dr. Alice Brown");
    assert_eq!(state.text(4), "Heart Checkup");
}

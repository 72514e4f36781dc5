// Rendering of every view at several terminal sizes:
// - 50x14 (extra small)
// - 80x24 (standard terminal)
// - 120x40 (wide terminal)

mod common;

use common::{render_text, TestAppBuilder};
use hrm::app::View;
use hrm::models::EntityKind;
use hrm::ui::LayoutContext;

const SIZES: [(u16, u16); 3] = [(50, 14), (80, 24), (120, 40)];

#[test]
fn test_every_view_renders_at_every_size() {
    for (width, height) in SIZES {
        for view in View::ALL {
            let mut app = TestAppBuilder::new().view(view).size(width, height).build();
            let text = render_text(&mut app);
            assert!(
                text.contains("Hospital Records"),
                "missing title for {view:?} at {width}x{height}"
            );
            assert!(!app.hit_registry.is_empty());
        }
    }
}

#[test]
fn test_dashboard_cards_and_upcoming() {
    let mut app = TestAppBuilder::new().build();
    let text = render_text(&mut app);

    for label in ["Total Patients", "Total Doctors", "Total Appointments", "Upcoming"] {
        assert!(text.contains(label), "missing card {label}");
    }
    assert!(text.contains("John Doe"));
    assert!(text.contains("Oct 31, 2025"));
}

#[test]
fn test_empty_tables_show_messages() {
    for (view, message) in [
        (View::Patients, "No patients found"),
        (View::Doctors, "No doctors found"),
        (View::Appointments, "No appointments found"),
    ] {
        let mut app = TestAppBuilder::new().empty().view(view).build();
        let text = render_text(&mut app);
        assert!(text.contains(message), "{view:?} should show '{message}'");
    }
}

#[test]
fn test_patient_table_columns() {
    let mut app = TestAppBuilder::new().view(View::Patients).build();
    let text = render_text(&mut app);

    for header in ["Name", "Age", "Gender", "Contact", "Medical History", "Actions"] {
        assert!(text.contains(header), "missing header {header}");
    }
    assert!(text.contains("Diabetes"));
    assert!(text.contains("[Edit]"));
    assert!(text.contains("[Delete]"));
    assert!(text.contains("Patients (2)"));
}

#[test]
fn test_narrow_terminal_abbreviates() {
    let mut app = TestAppBuilder::new()
        .view(View::Appointments)
        .size(50, 20)
        .build();
    let text = render_text(&mut app);

    assert!(text.contains("Appts"));
    assert!(text.contains("[E]"));
    assert!(!text.contains("[Edit]"));
}

#[test]
fn test_long_cells_are_truncated() {
    let mut app = TestAppBuilder::new().view(View::Doctors).size(80, 24).build();
    let id = app
        .store
        .doctors
        .add(hrm::models::DoctorDraft {
            name: "Dr. Bartholomew Maximilian Featherstonehaugh".into(),
            specialty: "Cardiology".into(),
            contact: "1".into(),
        })
        .id;
    assert_eq!(id, 3);

    let text = render_text(&mut app);
    assert!(text.contains("Dr. Bart"));
    assert!(text.contains('\u{2026}'));
    assert!(!text.contains("Featherstonehaugh"));
}

#[test]
fn test_selection_scrolls_into_view() {
    let mut app = TestAppBuilder::new()
        .empty()
        .view(View::Doctors)
        .size(80, 16)
        .build();
    for i in 0..20 {
        app.store.doctors.add(hrm::models::DoctorDraft {
            name: format!("Doctor {i:02}"),
            specialty: "General".into(),
            contact: "1".into(),
        });
    }
    app.select_id(EntityKind::Doctor, 20);

    let text = render_text(&mut app);
    assert!(text.contains("Doctor 19"));
    assert!(!text.contains("Doctor 00"));
}

#[test]
fn test_form_dialog_fits_short_terminal() {
    let mut app = TestAppBuilder::new()
        .view(View::Patients)
        .size(80, 20)
        .build();
    app.open_record_form(EntityKind::Patient, None);
    assert!(LayoutContext::new(80, 20).is_short());

    let text = render_text(&mut app);
    assert!(text.contains("Add Patient"));
    assert!(text.contains("Medical History"));
    assert!(text.contains("[ Save ]"));
}

use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::MockBookingService;
use booking_store_cell::{AppointmentStore, FILL_ALL_FIELDS};
use booking_view_cell::{parse_intent, BookingView, DispatchOutcome, Intent, IntentError};
use doctor_cell::MockDirectoryService;
use shared_config::AppConfig;
use shared_utils::test_utils::TestConfig;

fn test_store(config: &AppConfig) -> AppointmentStore {
    AppointmentStore::new(
        config,
        Arc::new(MockDirectoryService::new(config)),
        Arc::new(MockBookingService::new(config)),
    )
}

async fn mounted_view() -> (BookingView, AppointmentStore) {
    let store = test_store(&TestConfig::default().to_app_config());
    let view = BookingView::new(store.clone());
    view.mount().await.unwrap();
    (view, store)
}

#[tokio::test]
async fn test_parse_numbered_choices() {
    let (_view, store) = mounted_view().await;
    let view_model = store.snapshot();

    assert_eq!(
        parse_intent("doctor 1", &view_model),
        Ok(Intent::SelectDoctor(Some("doc1".to_string())))
    );
    assert_eq!(
        parse_intent("slot 4", &view_model),
        Ok(Intent::SelectSlot(Some("02:00 PM".to_string())))
    );
    assert_eq!(
        parse_intent("slot 09:00 AM", &view_model),
        Ok(Intent::SelectSlot(Some("09:00 AM".to_string())))
    );
    assert_eq!(
        parse_intent("  name   Jane Doe ", &view_model),
        Ok(Intent::SetPatientName("Jane Doe".to_string()))
    );
}

#[tokio::test]
async fn test_parse_errors() {
    let (_view, store) = mounted_view().await;
    let view_model = store.snapshot();

    assert_matches!(
        parse_intent("doctor 7", &view_model),
        Err(IntentError::OutOfRange { kind: "doctor", index: 7, available: 3 })
    );
    assert_matches!(parse_intent("slot", &view_model), Err(IntentError::MissingArgument("slot")));
    assert_matches!(parse_intent("dance", &view_model), Err(IntentError::UnknownCommand(_)));
    assert_eq!(parse_intent("", &view_model), Ok(Intent::Noop));
    assert_eq!(parse_intent("clear slot", &view_model), Ok(Intent::SelectSlot(None)));
}

#[tokio::test]
async fn test_dispatch_books_through_store() {
    let (view, store) = mounted_view().await;

    for line in ["name Jane Doe", "doctor doc1", "slot 1"] {
        assert_eq!(view.handle_line(line), DispatchOutcome::Continue);
    }
    assert_eq!(view.handle_line("book"), DispatchOutcome::Continue);
    assert!(store.state().is_loading);

    // Let the spawned booking finish.
    while store.state().is_loading {
        tokio::task::yield_now().await;
    }

    let state = store.state();
    assert_eq!(state.booked_appointments.len(), 1);
    assert_eq!(state.booked_appointments[0].patient_name, "Jane Doe");
}

#[tokio::test]
async fn test_submit_ignored_while_loading() {
    let (view, store) = mounted_view().await;

    // Incomplete form: the workflow fails locally and leaves loading set.
    view.handle_line("book");
    assert_eq!(store.state().error.as_deref(), Some(FILL_ALL_FIELDS));

    let outcome = view.handle_line("book");
    assert_matches!(outcome, DispatchOutcome::Message(ref text) if text.contains("disabled"));
}

#[tokio::test]
async fn test_json_dump_and_quit() {
    let (view, _store) = mounted_view().await;

    let outcome = view.handle_line("json");
    assert_matches!(outcome, DispatchOutcome::Message(ref json) if json.contains("\"submit_enabled\": true"));
    assert_eq!(view.handle_line("quit"), DispatchOutcome::Quit);
}

#[tokio::test]
async fn test_run_renders_and_applies_input() {
    let store = test_store(&TestConfig::default().to_app_config());
    let view = BookingView::new(store.clone());

    let input: &[u8] = b"name Jane Doe\nhelp\nquit\n";
    let mut output: Vec<u8> = Vec::new();
    view.run(input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Hospital Appointment Booking"));
    assert!(text.contains("Commands:"));
    assert_eq!(store.state().patient_name, "Jane Doe");
}

use std::fmt::Write;

use booking_store_cell::ViewModel;
use shared_utils::dates::parse_iso;

const RULE: &str = "==========================================";

/// Render the whole widget as plain text.
pub fn render(view_model: &ViewModel) -> String {
    let state = &view_model.state;
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  Hospital Appointment Booking");
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "Doctor:");
    if state.doctors.is_empty() {
        let hint = if state.is_loading { "Loading doctors..." } else { "No doctors loaded" };
        let _ = writeln!(out, "  ({})", hint);
    }
    for (i, doctor) in state.doctors.iter().enumerate() {
        let marker = if state.selected_doctor_id.as_deref() == Some(doctor.id.as_str()) { '*' } else { ' ' };
        let _ = writeln!(out, " {} {}. {} [{}]", marker, i + 1, doctor.display_label(), doctor.id);
    }

    let _ = writeln!(out, "Time slot:");
    for (i, slot) in state.available_slots.iter().enumerate() {
        let marker = if state.selected_slot.as_deref() == Some(slot.as_str()) { '*' } else { ' ' };
        let _ = writeln!(out, " {} {}. {}", marker, i + 1, slot);
    }

    let _ = writeln!(out, "Patient name: {}", state.patient_name);
    let date_hint = if state.booking_date.is_empty() || parse_iso(&state.booking_date).is_some() {
        ""
    } else {
        "  (expected YYYY-MM-DD)"
    };
    let _ = writeln!(out, "Date: {}{}", state.booking_date, date_hint);

    if view_model.submit_enabled {
        let _ = writeln!(out, "[ Book Appointment ]");
    } else {
        let _ = writeln!(out, "[ Booking... ] (disabled)");
    }

    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {}", error);
    }

    let _ = writeln!(out, "Booked appointments ({}):", state.booked_appointments.len());
    if state.booked_appointments.is_empty() {
        let _ = writeln!(out, "  none yet");
    }
    for appointment in &state.booked_appointments {
        let _ = writeln!(out, "  - {}", appointment.summary());
    }

    out
}

//! Pure state transitions. Every change to [`AppointmentState`] goes through
//! [`apply`]; nothing here touches anything outside the state value.

use appointment_cell::Appointment;
use doctor_cell::Doctor;

use crate::state::AppointmentState;

#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    PatientNameChanged(String),
    DoctorSelected(Option<String>),
    SlotSelected(Option<String>),
    BookingDateChanged(String),
    /// A workflow started: loading on, previous error cleared.
    RequestStarted,
    DoctorsLoaded(Vec<Doctor>),
    RequestFailed(String),
    /// The book workflow rejected the form before calling the service.
    /// `release_loading` is false unless the loading flag fix is enabled.
    LocalValidationFailed { message: String, release_loading: bool },
    AppointmentBooked(Appointment),
}

pub fn apply(mut state: AppointmentState, update: StateUpdate) -> AppointmentState {
    match update {
        StateUpdate::PatientNameChanged(name) => state.patient_name = name,
        StateUpdate::DoctorSelected(doctor_id) => state.selected_doctor_id = doctor_id,
        StateUpdate::SlotSelected(slot) => state.selected_slot = slot,
        StateUpdate::BookingDateChanged(date) => state.booking_date = date,
        StateUpdate::RequestStarted => {
            state.is_loading = true;
            state.error = None;
        }
        StateUpdate::DoctorsLoaded(doctors) => {
            state.doctors = doctors;
            state.is_loading = false;
        }
        StateUpdate::RequestFailed(message) => {
            state.error = Some(message);
            state.is_loading = false;
        }
        StateUpdate::LocalValidationFailed { message, release_loading } => {
            state.error = Some(message);
            if release_loading {
                state.is_loading = false;
            }
        }
        StateUpdate::AppointmentBooked(appointment) => {
            state.booked_appointments.push(appointment);
            // booking_date stays as the user set it
            state.patient_name.clear();
            state.selected_doctor_id = None;
            state.selected_slot = None;
            state.is_loading = false;
            state.error = None;
        }
    }
    state
}

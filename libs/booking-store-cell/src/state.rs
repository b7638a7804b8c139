use serde::{Deserialize, Serialize};

use appointment_cell::{Appointment, BookAppointmentRequest};
use doctor_cell::{find_doctor, Doctor};
use shared_models::AppError;
use shared_utils::dates::today_iso;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields to book an appointment.";

/// Everything the booking widget knows. Owned by exactly one store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentState {
    pub doctors: Vec<Doctor>,
    pub available_slots: Vec<String>,
    pub booked_appointments: Vec<Appointment>,
    pub selected_doctor_id: Option<String>,
    pub selected_slot: Option<String>,
    pub patient_name: String,
    pub booking_date: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AppointmentState {
    /// Fresh form state: no doctors yet, booking date set to today.
    pub fn initial(available_slots: Vec<String>) -> Self {
        Self {
            doctors: Vec::new(),
            available_slots,
            booked_appointments: Vec::new(),
            selected_doctor_id: None,
            selected_slot: None,
            patient_name: String::new(),
            booking_date: today_iso(),
            is_loading: false,
            error: None,
        }
    }

    /// The selected doctor, resolved against the loaded roster.
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected_doctor_id
            .as_deref()
            .and_then(|id| find_doctor(&self.doctors, id))
    }

    /// Local form validation. An id that does not resolve counts as missing.
    pub fn booking_request(&self) -> Result<BookAppointmentRequest, AppError> {
        let doctor = self.selected_doctor().cloned();
        let slot = self.selected_slot.as_deref().unwrap_or_default();

        if doctor.is_none() || slot.is_empty() || self.patient_name.is_empty() || self.booking_date.is_empty() {
            return Err(AppError::validation(FILL_ALL_FIELDS));
        }

        Ok(BookAppointmentRequest {
            patient_name: self.patient_name.clone(),
            doctor,
            time: slot.to_string(),
            date: self.booking_date.clone(),
        })
    }
}

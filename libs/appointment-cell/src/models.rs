use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use doctor_cell::Doctor;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

/// A confirmed booking. Immutable once created by the booking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_name: String,
    pub doctor: Doctor,
    pub time: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn summary(&self) -> String {
        format!(
            "{} with {} on {} at {}",
            self.patient_name, self.doctor.name, self.date, self.time
        )
    }
}

/// The four booking arguments as the form hands them over. Any of them may
/// be missing; the booking service rejects the request in that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_name: String,
    pub doctor: Option<Doctor>,
    pub time: String,
    pub date: String,
}

impl BookAppointmentRequest {
    pub fn new(patient_name: &str, doctor: Option<Doctor>, time: &str, date: &str) -> Self {
        Self {
            patient_name: patient_name.to_string(),
            doctor,
            time: time.to_string(),
            date: date.to_string(),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient_name.is_empty() {
            missing.push("patient_name");
        }
        if self.doctor.is_none() {
            missing.push("doctor");
        }
        if self.time.is_empty() {
            missing.push("time");
        }
        if self.date.is_empty() {
            missing.push("date");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

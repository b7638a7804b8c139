// libs/appointment-cell/src/services/booking.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::AppError;

use crate::models::{Appointment, BookAppointmentRequest, ALL_FIELDS_REQUIRED};

/// Creates appointments from completed booking forms.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book_appointment(&self, request: BookAppointmentRequest) -> Result<Appointment, AppError>;
}

/// In-memory booking API. Performs no conflict or duplicate checks.
pub struct MockBookingService {
    latency: Duration,
}

impl MockBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_latency(config.booking_latency())
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn validate_booking_request(&self, request: &BookAppointmentRequest) -> Result<(), AppError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            warn!("Rejecting booking request, missing fields: {:?}", missing);
            return Err(AppError::validation(ALL_FIELDS_REQUIRED));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingService for MockBookingService {
    async fn book_appointment(&self, request: BookAppointmentRequest) -> Result<Appointment, AppError> {
        self.validate_booking_request(&request)?;

        let BookAppointmentRequest {
            patient_name,
            doctor,
            time,
            date,
        } = request;
        let doctor = doctor.ok_or_else(|| AppError::validation(ALL_FIELDS_REQUIRED))?;

        debug!(
            "Booking {} with {} at {} on {} (simulated latency {:?})",
            patient_name, doctor.id, time, date, self.latency
        );
        tokio::time::sleep(self.latency).await;

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name,
            doctor,
            time,
            date,
            created_at: Utc::now(),
        };

        info!("Appointment {} booked: {}", appointment.id, appointment.summary());
        Ok(appointment)
    }
}

use shared_config::AppConfig;
use tracing::debug;

pub struct TestConfig {
    pub directory_latency_ms: u64,
    pub booking_latency_ms: u64,
    pub view_debounce_ms: u64,
    pub release_loading_on_invalid: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            directory_latency_ms: 0,
            booking_latency_ms: 0,
            view_debounce_ms: 0,
            release_loading_on_invalid: false,
        }
    }
}

impl TestConfig {
    /// Latencies matching the production mocks; pair with a paused clock.
    pub fn realistic() -> Self {
        Self {
            directory_latency_ms: 500,
            booking_latency_ms: 1000,
            ..Self::default()
        }
    }

    pub fn releasing_loading() -> Self {
        Self {
            release_loading_on_invalid: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        debug!(
            "Building test config (directory {}ms, booking {}ms)",
            self.directory_latency_ms, self.booking_latency_ms
        );
        AppConfig {
            directory_latency_ms: self.directory_latency_ms,
            booking_latency_ms: self.booking_latency_ms,
            view_debounce_ms: self.view_debounce_ms,
            release_loading_on_invalid: self.release_loading_on_invalid,
            ..AppConfig::default()
        }
    }
}

/// Form values for the canonical "Jane Doe books Dr. Smith" scenario.
pub struct TestBookingForm {
    pub patient_name: String,
    pub doctor_id: String,
    pub slot: String,
    pub date: String,
}

impl Default for TestBookingForm {
    fn default() -> Self {
        Self {
            patient_name: "Jane Doe".to_string(),
            doctor_id: "doc1".to_string(),
            slot: "09:00 AM".to_string(),
            date: "2026-10-20".to_string(),
        }
    }
}

impl TestBookingForm {
    pub fn for_patient(name: &str) -> Self {
        Self {
            patient_name: name.to_string(),
            ..Self::default()
        }
    }
}

// libs/booking-store-cell/src/store.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use appointment_cell::{BookAppointmentRequest, BookingService};
use doctor_cell::DirectoryService;
use shared_config::AppConfig;

use crate::state::AppointmentState;
use crate::updaters::{apply, StateUpdate};
use crate::view_model::{ViewModel, ViewModelSubscription};

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfig {
    /// Clear `is_loading` when the book workflow fails local validation.
    /// Off by default, which keeps the loading flag set after such a failure.
    pub release_loading_on_invalid: bool,
    pub view_debounce: Duration,
}

impl From<&AppConfig> for StoreConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            release_loading_on_invalid: config.release_loading_on_invalid,
            view_debounce: config.view_debounce(),
        }
    }
}

/// State container for the booking widget.
///
/// Cloning is cheap and every clone drives the same state. The two effects
/// spawn onto the current Tokio runtime; each trigger supersedes the previous
/// one of the same kind, and a superseded chain's result is discarded.
#[derive(Clone)]
pub struct AppointmentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<AppointmentState>,
    directory: Arc<dyn DirectoryService>,
    booking: Arc<dyn BookingService>,
    config: StoreConfig,
    fetch_generation: AtomicU64,
    book_generation: AtomicU64,
}

impl AppointmentStore {
    pub fn new(
        config: &AppConfig,
        directory: Arc<dyn DirectoryService>,
        booking: Arc<dyn BookingService>,
    ) -> Self {
        Self::with_state(
            AppointmentState::initial(config.available_slots.clone()),
            StoreConfig::from(config),
            directory,
            booking,
        )
    }

    pub fn with_state(
        initial: AppointmentState,
        config: StoreConfig,
        directory: Arc<dyn DirectoryService>,
        booking: Arc<dyn BookingService>,
    ) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                state,
                directory,
                booking,
                config,
                fetch_generation: AtomicU64::new(0),
                book_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn state(&self) -> AppointmentState {
        self.inner.state.borrow().clone()
    }

    pub fn snapshot(&self) -> ViewModel {
        ViewModel::from_state(&self.inner.state.borrow())
    }

    pub fn subscribe(&self) -> ViewModelSubscription {
        ViewModelSubscription::new(self.inner.state.subscribe(), self.inner.config.view_debounce)
    }

    pub fn set_patient_name(&self, name: impl Into<String>) {
        self.inner.update(StateUpdate::PatientNameChanged(name.into()));
    }

    pub fn select_doctor(&self, doctor_id: Option<String>) {
        self.inner.update(StateUpdate::DoctorSelected(doctor_id));
    }

    pub fn select_slot(&self, slot: Option<String>) {
        self.inner.update(StateUpdate::SlotSelected(slot));
    }

    pub fn set_booking_date(&self, date: impl Into<String>) {
        self.inner.update(StateUpdate::BookingDateChanged(date.into()));
    }

    /// Load the doctor roster. Must be called within a Tokio runtime.
    pub fn fetch_doctors_effect(&self) -> JoinHandle<()> {
        let generation = self.inner.fetch_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fetch doctors triggered (generation {})", generation);

        self.inner.update(StateUpdate::RequestStarted);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run_fetch(generation).await })
    }

    /// Book the appointment described by the current form. Must be called
    /// within a Tokio runtime.
    pub fn book_appointment_effect(&self) -> JoinHandle<()> {
        let generation = self.inner.book_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Book appointment triggered (generation {})", generation);

        let snapshot = self.state();
        self.inner.update(StateUpdate::RequestStarted);

        let request = match snapshot.booking_request() {
            Ok(request) => request,
            Err(err) => {
                warn!("Booking form incomplete: {}", err);
                self.inner.update(StateUpdate::LocalValidationFailed {
                    message: err.message().to_string(),
                    release_loading: self.inner.config.release_loading_on_invalid,
                });
                return tokio::spawn(async {});
            }
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.run_book(generation, request).await })
    }
}

impl StoreInner {
    fn update(&self, update: StateUpdate) {
        self.state.send_modify(|state| *state = apply(state.clone(), update));
    }

    fn is_current(counter: &AtomicU64, generation: u64) -> bool {
        counter.load(Ordering::SeqCst) == generation
    }

    #[instrument(skip(self))]
    async fn run_fetch(&self, generation: u64) {
        let result = self.directory.fetch_doctors().await;

        if !Self::is_current(&self.fetch_generation, generation) {
            debug!("Discarding superseded doctor fetch");
            return;
        }

        match result {
            Ok(doctors) => {
                info!("Loaded {} doctors", doctors.len());
                self.update(StateUpdate::DoctorsLoaded(doctors));
            }
            Err(err) => {
                warn!("Failed to load doctors: {}", err);
                self.update(StateUpdate::RequestFailed(err.message().to_string()));
            }
        }
    }

    #[instrument(skip(self, request))]
    async fn run_book(&self, generation: u64, request: BookAppointmentRequest) {
        debug!("Submitting booking for {}", request.patient_name);
        let result = self.booking.book_appointment(request).await;

        if !Self::is_current(&self.book_generation, generation) {
            debug!("Discarding superseded booking result");
            return;
        }

        match result {
            Ok(appointment) => {
                info!("Appointment {} added to the booked list", appointment.id);
                self.update(StateUpdate::AppointmentBooked(appointment));
            }
            Err(err) => {
                warn!("Booking failed: {}", err);
                self.update(StateUpdate::RequestFailed(err.message().to_string()));
            }
        }
    }
}

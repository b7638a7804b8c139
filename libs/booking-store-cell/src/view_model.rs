use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use doctor_cell::Doctor;

use crate::state::AppointmentState;

/// What the view renders from: the full state plus derived fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    #[serde(flatten)]
    pub state: AppointmentState,
    pub selected_doctor: Option<Doctor>,
    pub submit_enabled: bool,
}

impl ViewModel {
    pub fn from_state(state: &AppointmentState) -> Self {
        Self {
            selected_doctor: state.selected_doctor().cloned(),
            submit_enabled: !state.is_loading,
            state: state.clone(),
        }
    }
}

/// Debounced stream of view-models.
///
/// After a change is observed the subscription waits one scheduler tick (or
/// the configured debounce window) before reading, so any updates made in the
/// meantime collapse into a single emission. The first call to [`next`]
/// yields the current state.
///
/// [`next`]: ViewModelSubscription::next
pub struct ViewModelSubscription {
    receiver: watch::Receiver<AppointmentState>,
    debounce: Duration,
}

impl ViewModelSubscription {
    pub(crate) fn new(mut receiver: watch::Receiver<AppointmentState>, debounce: Duration) -> Self {
        receiver.mark_changed();
        Self { receiver, debounce }
    }

    /// Wait for the next coalesced snapshot. Returns `None` once the store
    /// has been dropped.
    ///
    /// Cancel safe: a change observed by a dropped call is still reported by
    /// the next one.
    pub async fn next(&mut self) -> Option<ViewModel> {
        self.receiver.changed().await.ok()?;
        // keep the change pending until it is actually read below
        self.receiver.mark_changed();

        if self.debounce.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.debounce).await;
        }

        let state = self.receiver.borrow_and_update();
        Some(ViewModel::from_state(&state))
    }
}

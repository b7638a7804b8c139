// libs/booking-view-cell/src/view.rs
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use booking_store_cell::{AppointmentStore, ViewModel};

use crate::intent::{parse_intent, Intent, HELP_TEXT};
use crate::render::render;

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Message(String),
    Quit,
}

/// Terminal front end for the booking form. Reads state only through the
/// store's view-model and writes only through its named operations.
pub struct BookingView {
    store: AppointmentStore,
}

impl BookingView {
    pub fn new(store: AppointmentStore) -> Self {
        Self { store }
    }

    /// Initial mount: kick off the doctor fetch.
    pub fn mount(&self) -> JoinHandle<()> {
        info!("Booking view mounted, loading doctors");
        self.store.fetch_doctors_effect()
    }

    pub fn dispatch(&self, intent: Intent) -> DispatchOutcome {
        debug!("Dispatching {:?}", intent);

        match intent {
            Intent::SetPatientName(name) => self.store.set_patient_name(name),
            Intent::SelectDoctor(doctor_id) => self.store.select_doctor(doctor_id),
            Intent::SelectSlot(slot) => self.store.select_slot(slot),
            Intent::SetBookingDate(date) => self.store.set_booking_date(date),
            Intent::Submit => {
                if !self.store.snapshot().submit_enabled {
                    return DispatchOutcome::Message(
                        "Booking is disabled while a request is in progress.".to_string(),
                    );
                }
                drop(self.store.book_appointment_effect());
            }
            Intent::Refresh => drop(self.store.fetch_doctors_effect()),
            Intent::Dump => {
                return match serde_json::to_string_pretty(&self.store.snapshot()) {
                    Ok(json) => DispatchOutcome::Message(json),
                    Err(e) => DispatchOutcome::Message(format!("Could not serialize state: {}", e)),
                };
            }
            Intent::Help => return DispatchOutcome::Message(HELP_TEXT.to_string()),
            Intent::Noop => {}
            Intent::Quit => return DispatchOutcome::Quit,
        }

        DispatchOutcome::Continue
    }

    pub fn handle_line(&self, line: &str) -> DispatchOutcome {
        match parse_intent(line, &self.store.snapshot()) {
            Ok(intent) => self.dispatch(intent),
            Err(e) => DispatchOutcome::Message(e.to_string()),
        }
    }

    /// Render on every view-model emission and dispatch each input line,
    /// until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut subscription = self.store.subscribe();
        let mut lines = input.lines();

        if let Some(view_model) = subscription.next().await {
            write_frame(&mut output, &view_model).await?;
        }
        let _fetch = self.mount();

        loop {
            tokio::select! {
                view_model = subscription.next() => match view_model {
                    Some(view_model) => write_frame(&mut output, &view_model).await?,
                    None => break,
                },
                line = lines.next_line() => match line? {
                    Some(line) => match self.handle_line(&line) {
                        DispatchOutcome::Continue => {}
                        DispatchOutcome::Message(text) => {
                            output.write_all(format!("{}\n{}", text, PROMPT).as_bytes()).await?;
                            output.flush().await?;
                        }
                        DispatchOutcome::Quit => break,
                    },
                    None => break,
                },
            }
        }

        info!("Booking view closed");
        output.flush().await?;
        Ok(())
    }
}

async fn write_frame<W: AsyncWrite + Unpin>(output: &mut W, view_model: &ViewModel) -> Result<()> {
    output.write_all(render(view_model).as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::MockBookingService;
use booking_store_cell::AppointmentStore;
use booking_view_cell::BookingView;
use doctor_cell::MockDirectoryService;
use shared_config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Logs go to stderr; stdout belongs to the view
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting appointment booking widget");

    let config = AppConfig::from_env();
    info!(
        "Directory latency {}ms, booking latency {}ms, {} slots",
        config.directory_latency_ms,
        config.booking_latency_ms,
        config.available_slots.len()
    );

    let store = AppointmentStore::new(
        &config,
        Arc::new(MockDirectoryService::new(&config)),
        Arc::new(MockBookingService::new(&config)),
    );

    let view = BookingView::new(store);
    view.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Booking widget stopped");
    Ok(())
}

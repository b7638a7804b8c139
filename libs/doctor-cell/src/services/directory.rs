// libs/doctor-cell/src/services/directory.rs
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::AppError;

use crate::models::{default_roster, Doctor};

/// Source of the doctor roster.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, AppError>;
}

/// In-memory directory that answers after a simulated network delay.
pub struct MockDirectoryService {
    latency: Duration,
    doctors: Vec<Doctor>,
    failure: Option<String>,
}

impl MockDirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_latency(config.directory_latency())
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            doctors: default_roster(),
            failure: None,
        }
    }

    /// A directory that always fails with `message` after the delay.
    pub fn failing(latency: Duration, message: impl Into<String>) -> Self {
        Self {
            latency,
            doctors: Vec::new(),
            failure: Some(message.into()),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl DirectoryService for MockDirectoryService {
    async fn fetch_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        debug!("Fetching doctors (simulated latency {:?})", self.latency);
        tokio::time::sleep(self.latency).await;

        if let Some(message) = &self.failure {
            warn!("Directory fetch failed: {}", message);
            return Err(AppError::external(message.clone()));
        }

        debug!("Directory returned {} doctors", self.doctors.len());
        Ok(self.doctors.clone())
    }
}

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_SLOTS: [&str; 5] = ["09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub directory_latency_ms: u64,
    pub booking_latency_ms: u64,
    pub view_debounce_ms: u64,
    pub release_loading_on_invalid: bool,
    pub available_slots: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            directory_latency_ms: 500,
            booking_latency_ms: 1000,
            view_debounce_ms: 0,
            release_loading_on_invalid: false,
            available_slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing keys fall back to
    /// the defaults; unparsable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            directory_latency_ms: parse_or(&lookup, "DIRECTORY_LATENCY_MS", defaults.directory_latency_ms),
            booking_latency_ms: parse_or(&lookup, "BOOKING_LATENCY_MS", defaults.booking_latency_ms),
            view_debounce_ms: parse_or(&lookup, "VIEW_DEBOUNCE_MS", defaults.view_debounce_ms),
            release_loading_on_invalid: parse_or(
                &lookup,
                "BOOKING_RELEASE_LOADING_ON_INVALID",
                defaults.release_loading_on_invalid,
            ),
            available_slots: match lookup("BOOKING_SLOTS") {
                Some(raw) => {
                    let slots: Vec<String> = raw
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    if slots.is_empty() {
                        warn!("BOOKING_SLOTS is empty, using default slots");
                        defaults.available_slots
                    } else {
                        slots
                    }
                }
                None => {
                    debug!("BOOKING_SLOTS not set, using default slots");
                    defaults.available_slots
                }
            },
        };

        if config.release_loading_on_invalid {
            warn!("BOOKING_RELEASE_LOADING_ON_INVALID enabled - local validation failures will clear the loading flag");
        }

        config
    }

    pub fn directory_latency(&self) -> Duration {
        Duration::from_millis(self.directory_latency_ms)
    }

    pub fn booking_latency(&self) -> Duration {
        Duration::from_millis(self.booking_latency_ms)
    }

    pub fn view_debounce(&self) -> Duration {
        Duration::from_millis(self.view_debounce_ms)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("{} has invalid value '{}', using default {}", key, raw, default);
                default
            }
        },
        None => {
            debug!("{} not set, using default {}", key, default);
            default
        }
    }
}

//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. With `json_logs` every
/// event is a JSON object, for container log collectors.
///
/// # Errors
///
/// Fails on an unparseable filter or if a subscriber is already installed.
pub fn init_tracing(default_level: &str, json_logs: bool) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| TelemetryError::InvalidFilter {
            filter: default_level.to_string(),
            reason: e.to_string(),
        })?;

    if json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))
    }
}

use crate::error::NewsError;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
/// Uses JSON format unless `RUST_LOG_FORMAT` is set to something other than `json`.
///
/// # Errors
/// Returns [`NewsError::Telemetry`] when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), NewsError> {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(true);

    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    let result = if use_json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init()
    };

    result.map_err(|e| NewsError::Telemetry(e.to_string()))
}

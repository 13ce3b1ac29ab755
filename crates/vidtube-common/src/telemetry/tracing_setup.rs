//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error returned when the subscriber cannot be installed
#[derive(Debug, thiserror::Error)]
#[error("failed to initialize tracing: {0}")]
pub struct TracingError(String);

/// Try to initialize tracing, returning Ok if successful
///
/// Uses the `RUST_LOG` environment variable for filtering if set,
/// otherwise defaults to "info" level. Does not panic when a subscriber
/// is already installed (tests initialize repeatedly).
pub fn try_init_tracing() -> Result<(), TracingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_file(true).with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError(e.to_string()))
}

//! Logging initialization

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::error::{AppError, Result};

/// Initialize the logging system
///
/// Sets up structured stderr logging with:
/// - Filter from `RUST_LOG`, falling back to [`Config::log_filter`]
/// - Target, file and line number on every event
/// - ANSI colours only when stderr is a terminal
///
/// Calling it twice returns [`AppError::Internal`] and leaves the first
/// subscriber in place.
pub fn init(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to install logger: {}", e)))?;

    tracing::info!(
        log_filter = %config.log_filter,
        buffer_seconds = config.buffer_seconds,
        "Logging initialized"
    );

    Ok(())
}

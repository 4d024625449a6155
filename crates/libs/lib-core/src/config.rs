//! # Application Configuration
//!
//! Configuration loaded from environment variables, validated on startup to
//! fail fast if misconfigured.
//!
//! | Variable                     | Default                               |
//! |------------------------------|---------------------------------------|
//! | `PREDICTIONS_BUFFER_SECONDS` | `30`                                  |
//! | `RUST_LOG`                   | `lib_core=info,round_card=info,warn`  |
//!
//! ## Global Config Access
//!
//! Initialize once at startup with [`init_config()`], then read it anywhere
//! with [`core_config()`]:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config()?;
//! let buffer = core_config()?.buffer_seconds;
//! # Ok::<(), lib_core::AppError>(())
//! ```

use std::sync::OnceLock;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{AppError, Result};

pub const DEFAULT_BUFFER_SECONDS: i64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "lib_core=info,round_card=info,warn";

/// Upper bound for the buffer; anything larger hides failed rounds for too long.
const MAX_BUFFER_SECONDS: i64 = 3600;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Grace period after a round's close timestamp before a round without an
    /// oracle report is shown as canceled.
    pub buffer_seconds: i64,

    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_seconds: DEFAULT_BUFFER_SECONDS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let buffer_seconds = get_env_parse_or("PREDICTIONS_BUFFER_SECONDS", DEFAULT_BUFFER_SECONDS)?;
        let log_filter = get_env_or("RUST_LOG", DEFAULT_LOG_FILTER);

        Ok(Self {
            buffer_seconds,
            log_filter,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_BUFFER_SECONDS).contains(&self.buffer_seconds) {
            return Err(AppError::Config(format!(
                "PREDICTIONS_BUFFER_SECONDS must be between 0 and {}",
                MAX_BUFFER_SECONDS
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(AppError::Config("RUST_LOG cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;

    core_config()
}

/// Get a reference to the global configuration.
///
/// # Errors
///
/// Returns [`AppError::Config`] if [`init_config()`] has not been called yet.
pub fn core_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| AppError::Config("Config must be initialized with init_config() before use".to_string()))
}

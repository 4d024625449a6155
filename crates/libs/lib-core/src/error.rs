//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`AppError`]. It follows the
//! `thiserror` pattern used across the workspace.
//!
//! ## Where Errors Come From
//!
//! The resolvers in [`crate::predictions`] are total functions and never fail.
//! Errors only appear at the edges:
//!
//! - [`Config`](AppError::Config) - missing or invalid environment configuration
//! - [`Decoding`](AppError::Decoding) - malformed round or currency JSON from the data provider
//! - [`Internal`](AppError::Internal) - unexpected failures (logger already installed, etc.)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//! use shared::Round;
//!
//! fn parse_round(raw: &str) -> Result<Round> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//!
//! assert!(parse_round(r#"{"epoch": 12}"#).is_ok());
//! assert!(matches!(parse_round("{"), Err(AppError::Decoding(_))));
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Crate-wide error type.
///
/// Each variant includes a descriptive `String` for context.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data decoding error (JSON from the data provider).
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

/// Convert environment lookup errors to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid value", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::Internal("logger already installed".to_string());
        assert_eq!(err.to_string(), "Internal error: logger already installed");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<shared::Round>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Decoding(_)));
        assert!(err.to_string().starts_with("Decoding error: JSON error:"));
    }

    #[test]
    fn test_from_env_error() {
        let err: AppError = lib_utils::envs::Error::WrongFormat("RUST_LOG").into();
        assert_eq!(err.to_string(), "Configuration error: RUST_LOG has an invalid value");
    }
}

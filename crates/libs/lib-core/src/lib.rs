//! # Core Library
//!
//! Configuration, logging, error handling and the view-model logic behind the
//! prediction round cards and the buy-crypto currency pickers.
//!
//! - **[`predictions`]**: Round outcome, AI agreement, failed rounds, expired card
//! - **[`onramp`]**: Currency select view model and modal seam

pub mod config;
pub mod error;
pub mod logging;
pub mod onramp;
pub mod predictions;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};

//! # Utilities Library
//!
//! Shared utility functions for environment variables, time, fixed-point
//! numbers and user input validation.

pub mod envs;
pub mod fixed;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use fixed::{format_big_int, rescale};
pub use time::{from_unix_seconds, now_utc};
pub use validation::sanitize_numeric_input;

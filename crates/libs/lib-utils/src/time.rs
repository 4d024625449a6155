//! # Time Utilities
//!
//! Utilities for time handling using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Convert unix seconds to a UTC `DateTime`.
pub fn from_unix_seconds(secs: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(secs, 0).ok_or(Error::TimestampOutOfRange(secs))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    TimestampOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

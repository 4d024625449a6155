//! Failed round detection.
//!
//! A round fails when the oracle never reports for it. The card waits for a
//! buffer after the scheduled close before declaring that, since the report
//! normally lands a few seconds late.

use chrono::{DateTime, Utc};

/// Source of the current time, injected so views can be rebuilt for any instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        lib_utils::now_utc()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Whether a round should be shown as canceled.
///
/// True when the oracle has not been called, the close timestamp is known, and
/// `now` is past `close_timestamp + buffer_seconds`.
pub fn has_round_failed(
    oracle_called: bool,
    close_timestamp: Option<i64>,
    buffer_seconds: i64,
    now: DateTime<Utc>,
) -> bool {
    if oracle_called {
        return false;
    }

    let Some(close_timestamp) = close_timestamp else {
        return false;
    };

    let deadline = close_timestamp.saturating_add(buffer_seconds);
    match lib_utils::from_unix_seconds(deadline) {
        Ok(deadline) => now > deadline,
        Err(err) => {
            tracing::warn!(close_timestamp, buffer_seconds, error = %err, "Round deadline out of range");
            false
        }
    }
}

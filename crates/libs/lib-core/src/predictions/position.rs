//! Round outcome from lock and close prices.

use serde::{Deserialize, Serialize};

/// Which side of a round won.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    /// Close price above lock price.
    Bull,
    /// Close price below lock price.
    Bear,
    /// Close price equal to lock price, a push.
    House,
}

impl Position {
    /// Classify a round from its lock and close prices.
    ///
    /// A missing price counts as `0`. A round that has locked but not closed
    /// therefore reads as `Bear` and a fresh round as `House`; callers show
    /// that transient state until the close price arrives.
    ///
    /// ```rust
    /// use lib_core::predictions::Position;
    ///
    /// assert_eq!(Position::from_prices(Some(100), Some(101)), Position::Bull);
    /// assert_eq!(Position::from_prices(None, None), Position::House);
    /// ```
    pub fn from_prices(lock_price: Option<i128>, close_price: Option<i128>) -> Self {
        let lock = lock_price.unwrap_or(0);
        let close = close_price.unwrap_or(0);

        match close.cmp(&lock) {
            std::cmp::Ordering::Greater => Position::Bull,
            std::cmp::Ordering::Less => Position::Bear,
            std::cmp::Ordering::Equal => Position::House,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::Bull => "BULL",
            Position::Bear => "BEAR",
            Position::House => "HOUSE",
        }
    }
}

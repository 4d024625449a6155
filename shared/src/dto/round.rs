//! # Prediction Round DTOs
//!
//! A [`Round`] is one discrete betting period of the prediction market. The data
//! provider creates it at round start with every price empty, fills `lock_price`
//! once at lock and `close_price`/`oracle_called` once at close. The core only
//! reads it.
//!
//! ## Price Scales
//!
//! | Field         | Decimals |
//! |---------------|----------|
//! | `lock_price`  | 8        |
//! | `close_price` | 8        |
//! | `ai_price`    | 18       |
//!
//! The AI price must be rescaled before it is compared with the lock price.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "epoch": 1024,
//!   "lock_price": "6123450000000",
//!   "close_price": "6130000000000",
//!   "ai_price": "61500000000000000000000",
//!   "oracle_called": true,
//!   "close_timestamp": 1704067500
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Decimals of `lock_price` and `close_price`.
pub const ORACLE_PRICE_DECIMALS: u32 = 8;

/// Decimals of `ai_price`.
pub const AI_PRICE_DECIMALS: u32 = 18;

/// One prediction round, identified by its epoch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    /// Monotonic round number.
    pub epoch: u64,

    /// Oracle price at lock, 8 decimals. `None` until the round locks.
    #[serde(default, with = "super::bigint::option", skip_serializing_if = "Option::is_none")]
    pub lock_price: Option<i128>,

    /// Oracle price at close, 8 decimals. `None` until the round closes.
    #[serde(default, with = "super::bigint::option", skip_serializing_if = "Option::is_none")]
    pub close_price: Option<i128>,

    /// Price predicted by the AI for this round, 18 decimals.
    #[serde(default, with = "super::bigint::option", skip_serializing_if = "Option::is_none")]
    pub ai_price: Option<i128>,

    /// Whether the oracle reported for this round.
    #[serde(default)]
    pub oracle_called: bool,

    /// Scheduled close time, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_timestamp: Option<i64>,
}

/// Side a user bet on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    Bull,
    Bear,
}

/// A user's bet in one round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    pub position: BetSide,

    /// Bet amount in the smallest unit of the betting token.
    #[serde(with = "super::bigint")]
    pub amount: i128,

    #[serde(default)]
    pub claimed: bool,
}

/// Whether the user entered the bull and/or bear side of a round.
///
/// The two flags are independent. A ledger only ever sets one of them, but
/// nothing here enforces that.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEntry {
    #[serde(default)]
    pub has_entered_up: bool,
    #[serde(default)]
    pub has_entered_down: bool,
}

impl UserEntry {
    pub fn new(has_entered_up: bool, has_entered_down: bool) -> Self {
        Self {
            has_entered_up,
            has_entered_down,
        }
    }

    /// Derive the entry flags from the user's ledger, if any.
    pub fn from_ledger(ledger: Option<&Ledger>) -> Self {
        match ledger.map(|l| l.position) {
            Some(BetSide::Bull) => Self::new(true, false),
            Some(BetSide::Bear) => Self::new(false, true),
            None => Self::default(),
        }
    }
}

/// Whether the user claimed winnings on either side.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserClaim {
    #[serde(default)]
    pub has_claimed_up: bool,
    #[serde(default)]
    pub has_claimed_down: bool,
}

impl UserClaim {
    pub fn from_ledger(ledger: Option<&Ledger>) -> Self {
        match ledger {
            Some(l) if l.claimed => match l.position {
                BetSide::Bull => Self { has_claimed_up: true, has_claimed_down: false },
                BetSide::Bear => Self { has_claimed_up: false, has_claimed_down: true },
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_from_provider_json() {
        let json = r#"{
            "epoch": 1024,
            "lock_price": "6123450000000",
            "close_price": 6130000000000,
            "ai_price": "61500000000000000000000",
            "oracle_called": true,
            "close_timestamp": 1704067500
        }"#;

        let round: Round = serde_json::from_str(json).unwrap();

        assert_eq!(round.epoch, 1024);
        assert_eq!(round.lock_price, Some(6_123_450_000_000));
        assert_eq!(round.close_price, Some(6_130_000_000_000));
        assert_eq!(round.ai_price, Some(61_500_000_000_000_000_000_000));
        assert!(round.oracle_called);
        assert_eq!(round.close_timestamp, Some(1_704_067_500));
    }

    #[test]
    fn test_ai_price_past_u64_must_be_a_string() {
        let err = serde_json::from_str::<Round>(r#"{"epoch":1,"ai_price":3000000000000000000000}"#).unwrap_err();
        assert!(err.to_string().contains("send it as a string"), "{err}");

        let round: Round = serde_json::from_str(r#"{"epoch":1,"ai_price":"3000000000000000000000"}"#).unwrap();
        assert_eq!(round.ai_price, Some(3_000_000_000_000_000_000_000));
    }

    #[test]
    fn test_fresh_round_has_no_prices() {
        let round: Round = serde_json::from_str(r#"{"epoch": 7}"#).unwrap();
        assert_eq!(round, Round { epoch: 7, ..Round::default() });

        let json = serde_json::to_string(&round).unwrap();
        assert_eq!(json, r#"{"epoch":7,"oracle_called":false}"#);
    }

    #[test]
    fn test_user_entry_from_ledger() {
        let bull = Ledger { position: BetSide::Bull, amount: 10, claimed: false };
        let bear = Ledger { position: BetSide::Bear, amount: 10, claimed: true };

        assert_eq!(UserEntry::from_ledger(Some(&bull)), UserEntry::new(true, false));
        assert_eq!(UserEntry::from_ledger(Some(&bear)), UserEntry::new(false, true));
        assert_eq!(UserEntry::from_ledger(None), UserEntry::new(false, false));
    }

    #[test]
    fn test_user_claim_from_ledger() {
        let unclaimed = Ledger { position: BetSide::Bull, amount: 10, claimed: false };
        let claimed = Ledger { position: BetSide::Bear, amount: 10, claimed: true };

        assert_eq!(UserClaim::from_ledger(Some(&unclaimed)), UserClaim::default());
        assert!(UserClaim::from_ledger(Some(&claimed)).has_claimed_down);
        assert!(!UserClaim::from_ledger(Some(&claimed)).has_claimed_up);
    }

    #[test]
    fn test_ledger_side_is_lowercase() {
        let ledger: Ledger = serde_json::from_str(r#"{"position":"bear","amount":"5"}"#).unwrap();
        assert_eq!(ledger.position, BetSide::Bear);
        assert!(!ledger.claimed);
    }
}

//! # AI Prediction Agreement
//!
//! Each AI round carries a price predicted by the AI. Comparing it with the
//! lock price gives the direction the AI bet on; comparing that with the side
//! the user entered tells whether the user followed the AI or bet against it.
//!
//! ## Scales
//!
//! The AI price has 18 decimals, the lock price 8. The AI price is truncated
//! to 8 decimals before the comparison. Comparing the raw integers would
//! almost always read as `Up`.
//!
//! ## Two Vocabularies
//!
//! The round card shows both results as UP/DOWN badges, but they mean
//! different things: [`PriceDirection`] is where the AI expects the price to
//! go, [`AgreementOutcome`] is whether the user sided with the AI.
//! [`AgreementOutcome::badge_direction`] is the only place the two meet.
//!
//! | AgreementOutcome | Badge       |
//! |------------------|-------------|
//! | `Following`      | `Up`        |
//! | `Against`        | `Down`      |
//! | `Undefined`      | `Undefined` |

use serde::{Deserialize, Serialize};
use shared::dto::round::{UserEntry, AI_PRICE_DECIMALS, ORACLE_PRICE_DECIMALS};

/// Decimals both prices are truncated to before comparing.
pub const COMPARISON_DECIMALS: u32 = 8;

/// Direction the AI predicted for the round.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceDirection {
    Up,
    Down,
    /// No AI or lock price, or the AI predicted exactly the lock price.
    #[default]
    Undefined,
}

impl PriceDirection {
    /// Direction predicted by `ai_price` (18 decimals) relative to `lock_price`
    /// (8 decimals).
    ///
    /// A missing or zero price yields `Undefined`, as does a prediction equal to
    /// the lock price once truncated to 8 decimals.
    ///
    /// ```rust
    /// use lib_core::predictions::PriceDirection;
    ///
    /// // 1.51 predicted against a 1.50 lock
    /// let direction = PriceDirection::from_ai_prediction(
    ///     Some(1_510_000_000_000_000_000),
    ///     Some(150_000_000),
    /// );
    /// assert_eq!(direction, PriceDirection::Up);
    /// ```
    pub fn from_ai_prediction(ai_price: Option<i128>, lock_price: Option<i128>) -> Self {
        let (ai_price, lock_price) = match (ai_price, lock_price) {
            (Some(ai), Some(lock)) if ai != 0 && lock != 0 => (ai, lock),
            _ => return PriceDirection::Undefined,
        };

        let ai = lib_utils::rescale(ai_price, AI_PRICE_DECIMALS, COMPARISON_DECIMALS);
        let lock = lib_utils::rescale(lock_price, ORACLE_PRICE_DECIMALS, COMPARISON_DECIMALS);

        tracing::trace!(
            ai = %lib_utils::format_big_int(ai_price, COMPARISON_DECIMALS, AI_PRICE_DECIMALS),
            lock = %lib_utils::format_big_int(lock_price, COMPARISON_DECIMALS, ORACLE_PRICE_DECIMALS),
            "Comparing AI prediction with lock price"
        );

        match ai.cmp(&lock) {
            std::cmp::Ordering::Greater => PriceDirection::Up,
            std::cmp::Ordering::Less => PriceDirection::Down,
            std::cmp::Ordering::Equal => PriceDirection::Undefined,
        }
    }
}

/// Whether the user's bet agrees with the AI's prediction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgreementOutcome {
    /// The user entered the side the AI predicted.
    Following,
    /// The user entered the opposite side.
    Against,
    /// No entry, or the AI made no usable prediction.
    #[default]
    Undefined,
}

impl AgreementOutcome {
    /// Compare the user's entry with the AI direction.
    ///
    /// When both entry flags are set, following wins.
    pub fn from_entry(ai_direction: PriceDirection, entry: UserEntry) -> Self {
        let UserEntry {
            has_entered_up: up,
            has_entered_down: down,
        } = entry;

        match ai_direction {
            PriceDirection::Up if up => AgreementOutcome::Following,
            PriceDirection::Down if down => AgreementOutcome::Following,
            PriceDirection::Up if down => AgreementOutcome::Against,
            PriceDirection::Down if up => AgreementOutcome::Against,
            _ => AgreementOutcome::Undefined,
        }
    }

    /// Badge arrow shown for this outcome on the round card.
    pub fn badge_direction(&self) -> PriceDirection {
        match self {
            AgreementOutcome::Following => PriceDirection::Up,
            AgreementOutcome::Against => PriceDirection::Down,
            AgreementOutcome::Undefined => PriceDirection::Undefined,
        }
    }
}

/// AI direction and user agreement for one round.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiAgreement {
    pub ai_direction: PriceDirection,
    pub user_agreement: AgreementOutcome,
}

impl AiAgreement {
    pub fn resolve(ai_price: Option<i128>, lock_price: Option<i128>, entry: UserEntry) -> Self {
        let ai_direction = PriceDirection::from_ai_prediction(ai_price, lock_price);
        let user_agreement = AgreementOutcome::from_entry(ai_direction, entry);

        Self {
            ai_direction,
            user_agreement,
        }
    }
}

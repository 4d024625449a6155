//! # Expired AI Round Card
//!
//! View model for a finished round in the AI prediction market. The renderer
//! draws exactly one of three cards:
//!
//! 1. **Canceled** - the oracle never reported and the buffer has passed
//! 2. **Calculating** - the round closed but no close price is known yet
//! 3. **Expired** - the full card: outcome, AI and user badges, two multiplier
//!    arrows and the collect-winnings overlay
//!
//! ## Multiplier Arrows
//!
//! In AI rounds the payout multipliers follow the AI rather than the price.
//! The bull multiplier pays whoever sided with the AI's prediction, so the
//! arrow pointing the AI's way shows it:
//!
//! | AI direction | Up arrow        | Down arrow      |
//! |--------------|-----------------|-----------------|
//! | `Up`         | bull multiplier | bear multiplier |
//! | `Down`       | bear multiplier | bull multiplier |
//! | `Undefined`  | bear multiplier | bear multiplier |

use serde::{Deserialize, Serialize};
use shared::dto::round::{Ledger, Round, UserClaim, UserEntry};

use super::ai::{AgreementOutcome, AiAgreement, PriceDirection};
use super::failure::{has_round_failed, Clock};
use super::position::Position;

/// Everything the card needs for one round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiredRoundInput {
    pub round: Round,

    /// Amount the user bet, if any.
    #[serde(default, with = "shared::dto::bigint::option", skip_serializing_if = "Option::is_none")]
    pub bet_amount: Option<i128>,

    #[serde(default)]
    pub entry: UserEntry,

    #[serde(default)]
    pub claim: UserClaim,

    /// Pre-formatted payout multipliers, e.g. `"1.92x"`.
    pub formatted_bull_multiplier: String,
    pub formatted_bear_multiplier: String,

    /// Whether this card is the one currently focused in the carousel.
    #[serde(default)]
    pub is_active: bool,
}

impl ExpiredRoundInput {
    pub fn new(round: Round, formatted_bull_multiplier: impl Into<String>, formatted_bear_multiplier: impl Into<String>) -> Self {
        Self {
            round,
            bet_amount: None,
            entry: UserEntry::default(),
            claim: UserClaim::default(),
            formatted_bull_multiplier: formatted_bull_multiplier.into(),
            formatted_bear_multiplier: formatted_bear_multiplier.into(),
            is_active: false,
        }
    }

    /// Fill bet amount, entry and claim flags from the user's ledger.
    pub fn with_ledger(mut self, ledger: &Ledger) -> Self {
        self.bet_amount = Some(ledger.amount);
        self.entry = UserEntry::from_ledger(Some(ledger));
        self.claim = UserClaim::from_ledger(Some(ledger));
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Border style of the card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardBorder {
    Active,
    Expired,
}

/// One of the two payout arrows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiplierArrow {
    pub multiplier: String,

    #[serde(default, with = "shared::dto::bigint::option", skip_serializing_if = "Option::is_none")]
    pub bet_amount: Option<i128>,

    /// The round settled on this arrow's side.
    pub is_active: bool,

    pub has_claimed: bool,

    /// The round was a tie; both arrows render the house state.
    pub is_house: bool,
}

/// The full expired card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiredRoundView {
    pub epoch: u64,
    pub border: CardBorder,
    pub outcome: Position,
    pub agreement: AiAgreement,

    /// Arrow on the AI badge.
    pub ai_badge: PriceDirection,

    /// Arrow on the user badge, up for following the AI and down for against.
    pub user_badge: PriceDirection,

    pub bull_arrow: MultiplierArrow,
    pub bear_arrow: MultiplierArrow,

    /// Collect-winnings overlay sits under the down arrow when the user bet
    /// against the AI.
    pub collect_winnings_at_bottom: bool,
}

/// Card selected for an expired round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ExpiredRoundCard {
    Canceled { epoch: u64 },
    Calculating { epoch: u64 },
    Expired(ExpiredRoundView),
}

impl ExpiredRoundCard {
    /// Pick the card for `input` at the clock's current time.
    pub fn build(input: &ExpiredRoundInput, buffer_seconds: i64, clock: &dyn Clock) -> Self {
        let round = &input.round;
        let epoch = round.epoch;

        if has_round_failed(round.oracle_called, round.close_timestamp, buffer_seconds, clock.now()) {
            tracing::debug!(epoch, "Round failed, showing canceled card");
            return ExpiredRoundCard::Canceled { epoch };
        }

        if matches!(round.close_price, None | Some(0)) {
            tracing::debug!(epoch, "Close price pending, showing calculating card");
            return ExpiredRoundCard::Calculating { epoch };
        }

        let view = ExpiredRoundView::resolve(input);
        tracing::debug!(
            epoch,
            outcome = view.outcome.label(),
            ai_direction = ?view.agreement.ai_direction,
            user_agreement = ?view.agreement.user_agreement,
            "Resolved expired round"
        );

        ExpiredRoundCard::Expired(view)
    }

    pub fn epoch(&self) -> u64 {
        match self {
            ExpiredRoundCard::Canceled { epoch } | ExpiredRoundCard::Calculating { epoch } => *epoch,
            ExpiredRoundCard::Expired(view) => view.epoch,
        }
    }
}

impl ExpiredRoundView {
    fn resolve(input: &ExpiredRoundInput) -> Self {
        let round = &input.round;
        let outcome = Position::from_prices(round.lock_price, round.close_price);
        let agreement = AiAgreement::resolve(round.ai_price, round.lock_price, input.entry);

        let bull = &input.formatted_bull_multiplier;
        let bear = &input.formatted_bear_multiplier;
        let (up_multiplier, down_multiplier) = match agreement.ai_direction {
            PriceDirection::Up => (bull, bear),
            PriceDirection::Down => (bear, bull),
            PriceDirection::Undefined => (bear, bear),
        };

        let is_house = outcome == Position::House;
        let arrow = |multiplier: &String, side: Position, has_claimed: bool| MultiplierArrow {
            multiplier: multiplier.clone(),
            bet_amount: input.bet_amount,
            is_active: outcome == side,
            has_claimed,
            is_house,
        };

        Self {
            epoch: round.epoch,
            border: if input.is_active { CardBorder::Active } else { CardBorder::Expired },
            outcome,
            agreement,
            ai_badge: agreement.ai_direction,
            user_badge: agreement.user_agreement.badge_direction(),
            bull_arrow: arrow(up_multiplier, Position::Bull, input.claim.has_claimed_up),
            bear_arrow: arrow(down_multiplier, Position::Bear, input.claim.has_claimed_down),
            collect_winnings_at_bottom: agreement.user_agreement == AgreementOutcome::Against,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::failure::FixedClock;
    use chrono::DateTime;
    use shared::dto::round::BetSide;

    const CLOSE: i64 = 1_704_067_500;
    const LOCK: i128 = 150_000_000;

    fn clock(secs: i64) -> FixedClock {
        FixedClock(DateTime::from_timestamp(secs, 0).unwrap())
    }

    fn closed_round(close_price: i128, ai_price: Option<i128>) -> Round {
        Round {
            epoch: 9,
            lock_price: Some(LOCK),
            close_price: Some(close_price),
            ai_price,
            oracle_called: true,
            close_timestamp: Some(CLOSE),
        }
    }

    fn expect_expired(card: ExpiredRoundCard) -> ExpiredRoundView {
        match card {
            ExpiredRoundCard::Expired(view) => view,
            other => panic!("expected expired card, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_round_is_canceled() {
        // Arrange
        let round = Round {
            epoch: 3,
            lock_price: Some(LOCK),
            close_timestamp: Some(CLOSE),
            ..Round::default()
        };
        let input = ExpiredRoundInput::new(round, "1.9x", "2.1x");

        // Act
        let card = ExpiredRoundCard::build(&input, 30, &clock(CLOSE + 31));

        // Assert
        assert_eq!(card, ExpiredRoundCard::Canceled { epoch: 3 });
    }

    #[test]
    fn test_missing_close_price_is_calculating() {
        let round = Round {
            epoch: 4,
            lock_price: Some(LOCK),
            close_timestamp: Some(CLOSE),
            ..Round::default()
        };
        let input = ExpiredRoundInput::new(round, "1.9x", "2.1x");

        let card = ExpiredRoundCard::build(&input, 30, &clock(CLOSE + 5));
        assert_eq!(card, ExpiredRoundCard::Calculating { epoch: 4 });

        let mut zero_close = input.clone();
        zero_close.round.close_price = Some(0);
        zero_close.round.oracle_called = true;
        let card = ExpiredRoundCard::build(&zero_close, 30, &clock(CLOSE + 500));
        assert_eq!(card.epoch(), 4);
        assert!(matches!(card, ExpiredRoundCard::Calculating { .. }));
    }

    #[test]
    fn test_ai_up_user_following() {
        // AI predicted 1.51, price closed at 1.55, user bet bull
        let round = closed_round(155_000_000, Some(1_510_000_000_000_000_000));
        let ledger = Ledger { position: BetSide::Bull, amount: 2_000_000, claimed: true };
        let input = ExpiredRoundInput::new(round, "1.90x", "2.10x").with_ledger(&ledger);

        let view = expect_expired(ExpiredRoundCard::build(&input, 30, &clock(CLOSE + 60)));

        assert_eq!(view.outcome, Position::Bull);
        assert_eq!(view.ai_badge, PriceDirection::Up);
        assert_eq!(view.agreement.user_agreement, AgreementOutcome::Following);
        assert_eq!(view.user_badge, PriceDirection::Up);
        assert_eq!(view.border, CardBorder::Expired);
        assert!(!view.collect_winnings_at_bottom);

        assert_eq!(
            view.bull_arrow,
            MultiplierArrow {
                multiplier: "1.90x".to_string(),
                bet_amount: Some(2_000_000),
                is_active: true,
                has_claimed: true,
                is_house: false,
            }
        );
        assert_eq!(view.bear_arrow.multiplier, "2.10x");
        assert!(!view.bear_arrow.is_active);
        assert!(!view.bear_arrow.has_claimed);
    }

    #[test]
    fn test_ai_down_swaps_multipliers() {
        let round = closed_round(140_000_000, Some(1_490_000_000_000_000_000));
        let ledger = Ledger { position: BetSide::Bull, amount: 5, claimed: false };
        let input = ExpiredRoundInput::new(round, "1.90x", "2.10x").with_ledger(&ledger).active(true);

        let view = expect_expired(ExpiredRoundCard::build(&input, 30, &clock(CLOSE)));

        assert_eq!(view.outcome, Position::Bear);
        assert_eq!(view.ai_badge, PriceDirection::Down);
        assert_eq!(view.agreement.user_agreement, AgreementOutcome::Against);
        assert_eq!(view.user_badge, PriceDirection::Down);
        assert_eq!(view.border, CardBorder::Active);
        assert!(view.collect_winnings_at_bottom);

        assert_eq!(view.bull_arrow.multiplier, "2.10x");
        assert_eq!(view.bear_arrow.multiplier, "1.90x");
        assert!(view.bear_arrow.is_active);
    }

    #[test]
    fn test_no_ai_prediction_shows_bear_multiplier_twice() {
        let round = closed_round(160_000_000, None);
        let input = ExpiredRoundInput::new(round, "1.90x", "2.10x");

        let view = expect_expired(ExpiredRoundCard::build(&input, 30, &clock(CLOSE)));

        assert_eq!(view.ai_badge, PriceDirection::Undefined);
        assert_eq!(view.user_badge, PriceDirection::Undefined);
        assert_eq!(view.bull_arrow.multiplier, "2.10x");
        assert_eq!(view.bear_arrow.multiplier, "2.10x");
        assert_eq!(view.bull_arrow.bet_amount, None);
    }

    #[test]
    fn test_tie_marks_both_arrows_house() {
        let round = closed_round(LOCK, Some(1_510_000_000_000_000_000));
        let input = ExpiredRoundInput::new(round, "1.90x", "2.10x");

        let view = expect_expired(ExpiredRoundCard::build(&input, 30, &clock(CLOSE)));

        assert_eq!(view.outcome, Position::House);
        assert!(view.bull_arrow.is_house && view.bear_arrow.is_house);
        assert!(!view.bull_arrow.is_active && !view.bear_arrow.is_active);
    }

    #[test]
    fn test_oracle_called_round_is_never_canceled() {
        let round = closed_round(155_000_000, None);
        let input = ExpiredRoundInput::new(round, "1.90x", "2.10x");

        let card = ExpiredRoundCard::build(&input, 30, &clock(CLOSE + 86_400));
        assert!(matches!(card, ExpiredRoundCard::Expired(_)));
    }

    #[test]
    fn test_card_json_is_tagged() {
        let card = ExpiredRoundCard::Canceled { epoch: 3 };
        assert_eq!(serde_json::to_string(&card).unwrap(), r#"{"state":"canceled","epoch":3}"#);

        let input: ExpiredRoundInput = serde_json::from_str(
            r#"{
                "round": {"epoch": 1, "lock_price": "150000000", "close_price": "151000000", "oracle_called": true},
                "bet_amount": "1000",
                "entry": {"has_entered_down": true},
                "formatted_bull_multiplier": "1.5x",
                "formatted_bear_multiplier": "2.5x"
            }"#,
        )
        .unwrap();
        let json = serde_json::to_value(ExpiredRoundCard::build(&input, 30, &clock(0))).unwrap();

        assert_eq!(json["state"], "expired");
        assert_eq!(json["outcome"], "BULL");
        assert_eq!(json["bull_arrow"]["bet_amount"], "1000");
        assert_eq!(json["agreement"]["user_agreement"], "undefined");
    }
}

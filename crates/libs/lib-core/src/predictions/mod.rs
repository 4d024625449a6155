//! # Prediction Market Rounds
//!
//! Pure decision logic behind the AI prediction round cards. Nothing here
//! stores state: every value is recomputed from a [`shared::Round`] snapshot
//! and the user's entry each time the card is drawn.
//!
//! ## Modules
//!
//! - **[`position`]**: Round outcome (bull, bear or house) from lock and close prices
//! - **[`ai`]**: AI predicted direction and whether the user followed it
//! - **[`failure`]**: Failed round detection and the injected [`Clock`]
//! - **[`expired_card`]**: Card selection and view model for expired rounds
//!
//! ## Example
//!
//! ```rust
//! use lib_core::predictions::{AgreementOutcome, AiAgreement, PriceDirection};
//! use shared::UserEntry;
//!
//! let result = AiAgreement::resolve(
//!     Some(1_490_000_000_000_000_000), // AI: 1.49, 18 decimals
//!     Some(150_000_000),               // lock: 1.50, 8 decimals
//!     UserEntry::new(true, false),     // user bet bull
//! );
//!
//! assert_eq!(result.ai_direction, PriceDirection::Down);
//! assert_eq!(result.user_agreement, AgreementOutcome::Against);
//! ```

pub mod ai;
pub mod expired_card;
pub mod failure;
pub mod position;

pub use ai::{AgreementOutcome, AiAgreement, PriceDirection};
pub use expired_card::{CardBorder, ExpiredRoundCard, ExpiredRoundInput, ExpiredRoundView, MultiplierArrow};
pub use failure::{has_round_failed, Clock, FixedClock, SystemClock};
pub use position::Position;

//! # Data Transfer Objects (DTOs)
//!
//! Data structures handed to the view-model core by the data provider.
//!
//! ## Module Organization
//!
//! - [`round`] - Prediction rounds, user ledgers and bet entries
//! - [`currency`] - Currencies and chains offered by the on-ramp
//! - [`bigint`] - String encoding for fixed-point integers
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "epoch": 1024,
//!   "lock_price": "6123450000000",
//!   "close_price": "6130000000000",
//!   "ai_price": "61500000000000000000000",
//!   "oracle_called": true,
//!   "close_timestamp": 1704067500
//! }
//! ```

pub mod bigint;
pub mod currency;
pub mod round;

pub use currency::*;
pub use round::*;

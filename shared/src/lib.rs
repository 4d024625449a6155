//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the data provider (round and ledger
//! readers, token lists) and the view-model core in `lib-core`.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::round`]**: Prediction rounds and user ledgers
//!   - **[`dto::currency`]**: Fiat and crypto currencies offered by the on-ramp
//!   - **[`dto::bigint`]**: Serde helpers for fixed-point integers sent as strings
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::truncate_symbol`]**: Shorten long token symbols
//!
//! ## Wire Format
//!
//! - Field names use **snake_case**
//! - Fixed-point prices and amounts are decimal **strings** (they overflow `f64`),
//!   JSON integers are accepted only within the `i64`/`u64` range
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::round::Round;
//! use shared::utils::truncate_symbol;
//!
//! let round: Round = serde_json::from_str(r#"{
//!     "epoch": 42,
//!     "lock_price": "150000000",
//!     "oracle_called": false
//! }"#).unwrap();
//! assert_eq!(round.lock_price, Some(150_000_000));
//! assert_eq!(truncate_symbol("BTC"), "BTC");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;

//! # Buy Crypto (On-Ramp)
//!
//! View models for the fiat-to-crypto purchase form.
//!
//! ## Modules
//!
//! - **[`currency_select`]**: The input (fiat + amount) and output (token + network) pickers
//! - **[`modal`]**: [`ModalController`] seam for the currency search dialog
//! - **[`constants`]**: Supported fiat currencies, tokens and networks

pub mod constants;
pub mod currency_select;
pub mod modal;

pub use constants::{fiat_currencies, network_display, onramp_currencies};
pub use currency_select::{
    CurrencySelect, CurrencySelectMode, CurrencySelectView, LeftSlot, LogoKind, SelectButton, SELECT_A_CURRENCY,
};
pub use modal::{CurrencySearchRequest, ModalController};

//! # Shared Utility Functions
//!
//! Display helpers used by the view models in `lib-core`.
//!
//! ## Label Formatting
//!
//! - [`truncate_symbol`] - Shorten token symbols longer than 10 characters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_symbol;
//!
//! assert_eq!(truncate_symbol("ABCDEFGHIJK"), "ABCD…GHIJK");
//! ```

/// Labels longer than this are shortened by [`truncate_symbol`].
pub const SYMBOL_MAX_LEN: usize = 10;

const SYMBOL_PREFIX_LEN: usize = 4;
const SYMBOL_SUFFIX_LEN: usize = 5;

/// Shorten a token symbol for the selector button.
///
/// Symbols of at most [`SYMBOL_MAX_LEN`] characters are returned unchanged.
/// Longer ones keep their first 4 and last 5 characters around a `…`.
///
/// Lengths and cut points are counted in UTF-16 code units, the unit browsers
/// index strings by, so a symbol made of characters outside the Basic
/// Multilingual Plane counts two per character. A cut that lands inside a
/// surrogate pair leaves a replacement character.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_symbol;
///
/// assert_eq!(truncate_symbol("BTC"), "BTC");
/// assert_eq!(truncate_symbol("ABCDEFGHIJ"), "ABCDEFGHIJ");
/// assert_eq!(truncate_symbol("ABCDEFGHIJK"), "ABCD…GHIJK");
/// ```
pub fn truncate_symbol(symbol: &str) -> String {
    let units: Vec<u16> = symbol.encode_utf16().collect();
    let len = units.len();
    if len <= SYMBOL_MAX_LEN {
        return symbol.to_string();
    }

    let prefix = String::from_utf16_lossy(&units[..SYMBOL_PREFIX_LEN]);
    let suffix = String::from_utf16_lossy(&units[len - SYMBOL_SUFFIX_LEN..]);

    format!("{}…{}", prefix, suffix)
}

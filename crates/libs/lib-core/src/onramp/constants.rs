//! On-ramp currency tables

use shared::dto::currency::{ChainId, Currency};

/// Fiat currencies accepted on the input side, `(symbol, name)`.
pub const FIAT_CURRENCIES: &[(&str, &str)] = &[
    ("USD", "United States Dollar"),
    ("EUR", "Euro"),
    ("GBP", "Great British Pound"),
    ("HKD", "Hong Kong Dollar"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("BRL", "Brazil Real"),
    ("JPY", "Japanese Yen"),
    ("KRW", "South Korean Won"),
    ("VND", "Vietnamese Dong"),
];

/// Tokens that can be bought, `(symbol, name, chain)`.
pub const ONRAMP_CURRENCIES: &[(&str, &str, ChainId)] = &[
    ("BNB", "Binance Chain Native Token", ChainId::BSC),
    ("USDT", "Tether USD", ChainId::BSC),
    ("USDC", "Binance-Peg USD Coin", ChainId::BSC),
    ("ETH", "Ethereum", ChainId::ETHEREUM),
    ("USDT", "Tether USD", ChainId::ETHEREUM),
    ("USDC", "USD Coin", ChainId::ETHEREUM),
    ("DAI", "Dai Stablecoin", ChainId::ETHEREUM),
    ("WBTC", "Wrapped BTC", ChainId::ETHEREUM),
    ("ETH", "Ethereum", ChainId::ARBITRUM_ONE),
    ("USDC", "USD Coin", ChainId::ARBITRUM_ONE),
    ("ETH", "Ethereum", ChainId::ZKSYNC),
    ("USDC", "USD Coin", ChainId::ZKSYNC),
    ("ETH", "Ethereum", ChainId::LINEA),
    ("ETH", "Ethereum", ChainId::BASE),
    ("USDC", "USD Coin", ChainId::BASE),
    ("ETH", "Ethereum", ChainId::POLYGON_ZKEVM),
];

pub fn fiat_currencies() -> Vec<Currency> {
    FIAT_CURRENCIES
        .iter()
        .map(|(symbol, name)| Currency::fiat(symbol, name))
        .collect()
}

pub fn onramp_currencies() -> Vec<Currency> {
    ONRAMP_CURRENCIES
        .iter()
        .map(|(symbol, name, chain)| Currency::crypto(symbol, name, *chain))
        .collect()
}

/// Network name shown next to a crypto currency. Empty for fiat and
/// unsupported chains.
pub fn network_display(chain_id: Option<ChainId>) -> &'static str {
    match chain_id {
        Some(ChainId::ETHEREUM) => "ethereum",
        Some(ChainId::BSC) => "binance",
        Some(ChainId::ZKSYNC) => "zksync",
        Some(ChainId::ARBITRUM_ONE) => "arbitrum",
        Some(ChainId::LINEA) => "linea",
        Some(ChainId::BASE) => "base",
        Some(ChainId::POLYGON_ZKEVM) => "polygon zkevm",
        _ => "",
    }
}

//! # Currency DTOs
//!
//! Currencies shown by the on-ramp currency selector. The input side of the
//! on-ramp lists fiat currencies, the output side lists crypto tokens on a
//! specific chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// EVM chain identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    pub const ETHEREUM: ChainId = ChainId(1);
    pub const BSC: ChainId = ChainId(56);
    pub const ZKSYNC: ChainId = ChainId(324);
    pub const POLYGON_ZKEVM: ChainId = ChainId(1101);
    pub const BASE: ChainId = ChainId(8453);
    pub const ARBITRUM_ONE: ChainId = ChainId(42161);
    pub const LINEA: ChainId = ChainId(59144);
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a currency is a government currency or an on-chain asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyKind {
    Fiat,
    Crypto,
}

/// A currency the user can pick in the on-ramp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub kind: CurrencyKind,

    /// Ticker. Tokens fetched from a list may come without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    pub name: String,

    /// Chain the token lives on. Always `None` for fiat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<ChainId>,
}

impl Currency {
    pub fn fiat(symbol: &str, name: &str) -> Self {
        Self {
            kind: CurrencyKind::Fiat,
            symbol: Some(symbol.to_string()),
            name: name.to_string(),
            chain_id: None,
        }
    }

    pub fn crypto(symbol: &str, name: &str, chain_id: ChainId) -> Self {
        Self {
            kind: CurrencyKind::Crypto,
            symbol: Some(symbol.to_string()),
            name: name.to_string(),
            chain_id: Some(chain_id),
        }
    }

    /// Symbol if present and non-empty.
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_fiat(&self) -> bool {
        self.kind == CurrencyKind::Fiat
    }
}

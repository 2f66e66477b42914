//! Instrument types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::risk::CalcError;

/// Broad instrument category driving pip rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    /// Currency pairs
    Forex,
    /// Metals and energies
    Commodity,
    /// Crypto pairs
    Crypto,
    /// Equities
    Stock,
}

impl AssetClass {
    /// All classes in catalog lookup order
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Forex,
        AssetClass::Commodity,
        AssetClass::Crypto,
        AssetClass::Stock,
    ];

    /// Lowercase name, also used as a metrics label
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Forex => "forex",
            AssetClass::Commodity => "commodity",
            AssetClass::Crypto => "crypto",
            AssetClass::Stock => "stock",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forex" => Ok(AssetClass::Forex),
            "commodity" => Ok(AssetClass::Commodity),
            "crypto" => Ok(AssetClass::Crypto),
            "stock" => Ok(AssetClass::Stock),
            other => Err(CalcError::UnknownAssetClass(other.to_string())),
        }
    }
}

/// A tradable symbol together with its resolved asset class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instrument {
    /// Symbol as entered, e.g. "EUR/USD" or "XAUUSD"
    pub symbol: String,
    /// Class the symbol resolved to
    pub asset_class: AssetClass,
}

impl Instrument {
    /// Create an instrument with an explicit class
    pub fn new(symbol: impl Into<String>, asset_class: AssetClass) -> Self {
        Self {
            symbol: symbol.into(),
            asset_class,
        }
    }
}

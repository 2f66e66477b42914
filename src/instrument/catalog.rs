//! Curated symbol tables
//!
//! Symbols are matched exactly against one table per asset class. Lookup
//! order is forex, commodity, crypto, stock; the first table holding the
//! symbol decides its class.

use std::collections::{HashMap, HashSet};

use super::types::{AssetClass, Instrument};

const FOREX: &[&str] = &[
    // majors
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "AUD/USD", "USD/CAD", "NZD/USD",
    // minors
    "EUR/GBP", "EUR/CHF", "EUR/AUD", "EUR/CAD", "EUR/NZD", "GBP/CHF", "GBP/AUD",
    "GBP/CAD", "GBP/NZD", "AUD/CHF", "AUD/CAD", "AUD/NZD", "NZD/CHF", "NZD/CAD",
    "CAD/CHF",
    // yen crosses
    "EUR/JPY", "GBP/JPY", "AUD/JPY", "NZD/JPY", "CAD/JPY", "CHF/JPY",
];

const COMMODITY: &[&str] = &[
    "XAU/USD", "XAUUSD", "XAG/USD", "XAGUSD", "XTI/USD", "XTIUSD", "XBR/USD", "XBRUSD",
    "XPT/USD", "XPTUSD", "XPD/USD", "XPDUSD", "XNG/USD", "XNGUSD",
];

const CRYPTO: &[&str] = &[
    "BTC/USD", "ETH/USD", "LTC/USD", "XRP/USD", "BCH/USD", "ADA/USD", "SOL/USD",
    "DOT/USD", "BNB/USD",
];

/// Symbol tables per asset class
#[derive(Debug, Clone)]
pub struct InstrumentCatalog {
    /// Table revision, bumped whenever the built-in data changes
    pub version: u32,
    tables: HashMap<AssetClass, HashSet<String>>,
}

impl InstrumentCatalog {
    /// Built-in tables (stocks are left empty and come from config)
    pub fn builtin() -> Self {
        Self::empty(1)
            .with_symbols(AssetClass::Forex, FOREX.iter().copied())
            .with_symbols(AssetClass::Commodity, COMMODITY.iter().copied())
            .with_symbols(AssetClass::Crypto, CRYPTO.iter().copied())
    }

    /// A catalog with no symbols
    pub fn empty(version: u32) -> Self {
        Self {
            version,
            tables: HashMap::new(),
        }
    }

    /// Add symbols to one class table
    pub fn with_symbols<I, S>(mut self, asset_class: AssetClass, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .entry(asset_class)
            .or_default()
            .extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Classify a symbol by exact match, `None` when no table holds it
    pub fn classify(&self, symbol: &str) -> Option<AssetClass> {
        AssetClass::ALL.into_iter().find(|class| {
            self.tables
                .get(class)
                .is_some_and(|table| table.contains(symbol))
        })
    }

    /// Classify and wrap into an [`Instrument`]
    pub fn resolve(&self, symbol: &str) -> Option<Instrument> {
        self.classify(symbol)
            .map(|asset_class| Instrument::new(symbol, asset_class))
    }

    /// Number of symbols known for a class
    pub fn len(&self, asset_class: AssetClass) -> usize {
        self.tables.get(&asset_class).map_or(0, HashSet::len)
    }

    /// Whether the catalog has no symbols at all
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashSet::is_empty)
    }
}

impl Default for InstrumentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Pip value and pip distance rules
//!
//! Rules are plain data evaluated top to bottom. Each rule is scoped to an
//! asset class and optionally to symbols containing a marker such as "JPY"
//! or "XAU". A rule carries both the monetary value of one pip per standard
//! lot and the multiplier that turns a raw price difference into pips.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::types::CalcError;
use crate::instrument::AssetClass;

/// Pip value for symbols no rule covers
pub const DEFAULT_PIP_VALUE: Decimal = dec!(10);

/// Price-difference multiplier for symbols no rule covers
pub const DEFAULT_PIP_MULTIPLIER: Decimal = dec!(10000);

/// One row of the pip table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PipRule {
    /// Class the rule applies to
    pub asset_class: AssetClass,
    /// Substring the symbol must contain, any symbol when absent
    #[serde(default)]
    pub contains: Option<String>,
    /// Value of one pip for one standard lot/contract
    pub pip_value: Decimal,
    /// Multiplier from raw price difference to pips
    pub multiplier: Decimal,
}

impl PipRule {
    /// Rule matching every symbol of a class
    pub fn class(asset_class: AssetClass, pip_value: Decimal, multiplier: Decimal) -> Self {
        Self {
            asset_class,
            contains: None,
            pip_value,
            multiplier,
        }
    }

    /// Rule matching symbols of a class that contain `marker`
    pub fn containing(
        asset_class: AssetClass,
        marker: impl Into<String>,
        pip_value: Decimal,
        multiplier: Decimal,
    ) -> Self {
        Self {
            asset_class,
            contains: Some(marker.into()),
            pip_value,
            multiplier,
        }
    }

    /// Reject rules that would produce zero or negative pips
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.pip_value <= Decimal::ZERO || self.multiplier <= Decimal::ZERO {
            return Err(CalcError::InvalidArgument(format!(
                "pip_value {} and multiplier {} must be positive",
                self.pip_value, self.multiplier
            )));
        }
        if self.contains.as_deref() == Some("") {
            return Err(CalcError::InvalidArgument("contains must not be empty".to_string()));
        }
        Ok(())
    }

    fn matches(&self, asset_class: AssetClass, symbol: &str) -> bool {
        self.asset_class == asset_class
            && self
                .contains
                .as_deref()
                .map_or(true, |marker| symbol.contains(marker))
    }
}

/// Ordered pip rules, first match wins
#[derive(Debug, Clone)]
pub struct PipTable {
    /// Table revision
    pub version: u32,
    rules: Vec<PipRule>,
}

impl PipTable {
    /// Built-in rules
    pub fn builtin() -> Self {
        use crate::instrument::AssetClass::*;

        let rules = vec![
            PipRule::containing(Forex, "JPY", dec!(1000), dec!(100)),
            PipRule::class(Forex, dec!(10), dec!(10000)),
            PipRule::class(Crypto, dec!(1), dec!(1)),
            PipRule::class(Stock, dec!(1), dec!(100)),
            PipRule::containing(Commodity, "XAU", dec!(100), dec!(10)),
            PipRule::containing(Commodity, "XAG", dec!(50), dec!(100)),
            PipRule::containing(Commodity, "XTI", dec!(100), dec!(100)),
            PipRule::containing(Commodity, "XBR", dec!(100), dec!(100)),
            PipRule::containing(Commodity, "XPT", dec!(50), dec!(100)),
            PipRule::containing(Commodity, "XPD", dec!(100), dec!(100)),
            PipRule::class(Commodity, dec!(10), dec!(100)),
        ];

        Self { version: 1, rules }
    }

    /// A table with no rules; everything falls back to the defaults
    pub fn empty(version: u32) -> Self {
        Self {
            version,
            rules: Vec::new(),
        }
    }

    /// Put a rule ahead of every existing rule
    pub fn with_rule(mut self, rule: PipRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[PipRule] {
        &self.rules
    }

    fn rule_for(&self, asset_class: Option<AssetClass>, symbol: &str) -> Option<&PipRule> {
        let asset_class = asset_class?;
        self.rules
            .iter()
            .find(|rule| rule.matches(asset_class, symbol))
    }

    /// Monetary value of one pip per standard lot
    pub fn pip_value_per_lot(&self, asset_class: Option<AssetClass>, symbol: &str) -> Decimal {
        self.rule_for(asset_class, symbol)
            .map_or(DEFAULT_PIP_VALUE, |rule| rule.pip_value)
    }

    /// Multiplier from price difference to pips
    pub fn multiplier(&self, asset_class: Option<AssetClass>, symbol: &str) -> Decimal {
        self.rule_for(asset_class, symbol)
            .map_or(DEFAULT_PIP_MULTIPLIER, |rule| rule.multiplier)
    }

    /// Distance between two prices in pips, zero if either price is zero
    pub fn pip_distance(
        &self,
        asset_class: Option<AssetClass>,
        symbol: &str,
        price_a: Decimal,
        price_b: Decimal,
    ) -> Decimal {
        self.checked_pip_distance(asset_class, symbol, price_a, price_b)
            .unwrap_or(Decimal::ZERO)
    }

    /// Like [`PipTable::pip_distance`] but `None` on overflow
    pub fn checked_pip_distance(
        &self,
        asset_class: Option<AssetClass>,
        symbol: &str,
        price_a: Decimal,
        price_b: Decimal,
    ) -> Option<Decimal> {
        if price_a.is_zero() || price_b.is_zero() {
            return Some(Decimal::ZERO);
        }
        let raw_diff = price_a.checked_sub(price_b)?.abs();
        raw_diff.checked_mul(self.multiplier(asset_class, symbol))
    }
}

impl Default for PipTable {
    fn default() -> Self {
        Self::builtin()
    }
}

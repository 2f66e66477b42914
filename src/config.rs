//! Configuration types for trade-risk

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::instrument::{AssetClass, InstrumentCatalog};
use crate::risk::{PipRule, PipTable, TradeRiskCalculator};
use crate::telemetry::LogFormat;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A pip rule would produce meaningless pips
    #[error("Invalid pip rule for {asset_class}: {reason}")]
    InvalidRule {
        asset_class: AssetClass,
        reason: String,
    },
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Extra pip rules, evaluated before the built-in ones in file order
    #[serde(default)]
    pub pip_rules: Vec<PipRule>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Defaults applied to CLI input
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Risk percent used when none is given
    #[serde(default = "default_risk_percent")]
    pub risk_percent: Decimal,
    /// Account size used when none is given
    #[serde(default)]
    pub account_size: Option<Decimal>,
}

fn default_risk_percent() -> Decimal {
    Decimal::ONE // 1%
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            risk_percent: default_risk_percent(),
            account_size: None,
        }
    }
}

/// Extra symbols per asset class, added to the built-in tables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub forex: Vec<String>,
    #[serde(default)]
    pub commodity: Vec<String>,
    #[serde(default)]
    pub crypto: Vec<String>,
    #[serde(default)]
    pub stock: Vec<String>,
}

impl CatalogConfig {
    /// Number of configured symbols across all classes
    pub fn len(&self) -> usize {
        self.forex.len() + self.commodity.len() + self.crypto.len() + self.stock.len()
    }

    /// Whether no extra symbols are configured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.pip_rules {
            rule.validate().map_err(|e| ConfigError::InvalidRule {
                asset_class: rule.asset_class,
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Built-in catalog extended with configured symbols
    pub fn instrument_catalog(&self) -> InstrumentCatalog {
        InstrumentCatalog::builtin()
            .with_symbols(AssetClass::Forex, self.catalog.forex.iter().cloned())
            .with_symbols(AssetClass::Commodity, self.catalog.commodity.iter().cloned())
            .with_symbols(AssetClass::Crypto, self.catalog.crypto.iter().cloned())
            .with_symbols(AssetClass::Stock, self.catalog.stock.iter().cloned())
    }

    /// Built-in pip table with configured rules in front
    pub fn pip_table(&self) -> PipTable {
        // prepend in reverse so the first configured rule ends up first
        self.pip_rules
            .iter()
            .rev()
            .cloned()
            .fold(PipTable::builtin(), PipTable::with_rule)
    }

    /// Calculator over the configured tables
    pub fn calculator(&self) -> TradeRiskCalculator {
        TradeRiskCalculator::new(self.instrument_catalog(), self.pip_table())
    }
}

//! Integration tests for configuration loading

use rust_decimal_macros::dec;
use std::io::Write;
use trade_risk::config::{Config, ConfigError};
use trade_risk::{AssetClass, Instrument, TradeProposal};

#[test]
fn test_config_example_loads() {
    let config = Config::parse(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.telemetry.log_level, "info");
    assert_eq!(config.defaults.risk_percent, dec!(1));
    assert!(config.catalog.stock.contains(&"AAPL".to_string()));
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [catalog]
        stock = ["NVDA"]

        [[pip_rules]]
        asset_class = "stock"
        contains = "NVDA"
        pip_value = 5
        multiplier = 100
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let calculator = config.calculator();

    assert_eq!(calculator.classify("NVDA"), Some(AssetClass::Stock));

    let instrument = Instrument::new("NVDA", AssetClass::Stock);
    let proposal = TradeProposal::new(dec!(10000), dec!(1), dec!(120.00), dec!(119.00), dec!(123.00));
    let result = calculator.compute(&instrument, &proposal);

    // 1.00 * 100 = 100 pips at 5 per lot, risk 100
    assert_eq!(result.loss_pips, dec!(100));
    assert_eq!(result.pip_value_per_lot, dec!(5));
    assert_eq!(result.lot_size, dec!(0.2));
    assert_eq!(result.risk_reward_ratio, dec!(3));
}

#[test]
fn test_config_load_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults\nrisk_percent = ").unwrap();

    let result = Config::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_unconfigured_stock_is_unavailable() {
    let calculator = Config::default().calculator();
    let instrument = Instrument::new("NVDA", AssetClass::Stock);
    let proposal = TradeProposal::new(dec!(10000), dec!(1), dec!(120.00), dec!(119.00), dec!(123.00));
    assert!(calculator.compute(&instrument, &proposal).is_zeroed());
}

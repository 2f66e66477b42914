//! Integration tests for the trade risk calculator

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trade_risk::risk::{Direction, PipTable, Unavailable};
use trade_risk::{AssetClass, InstrumentCatalog, TradeProposal, TradeRiskCalculator};

#[test]
fn test_classify_then_compute() {
    let catalog = InstrumentCatalog::builtin();
    let calculator = TradeRiskCalculator::default();

    let instrument = catalog.resolve("EUR/USD").unwrap();
    let proposal = TradeProposal::from_fields("10000", "2", "1.1000", "1.0950", "1.1100").unwrap();
    let result = calculator.compute(&instrument, &proposal).rounded();

    assert_eq!(result.risk_amount, dec!(200));
    assert_eq!(result.loss_pips, dec!(50));
    assert_eq!(result.profit_pips, dec!(100));
    assert_eq!(result.pip_value_per_lot, dec!(10));
    assert_eq!(result.lot_size, dec!(0.4));
    assert_eq!(result.potential_profit, dec!(400));
    assert_eq!(result.risk_reward_ratio, dec!(2.0));
}

#[test]
fn test_partially_typed_form_zero_fills() {
    let calculator = TradeRiskCalculator::default();
    let instrument = InstrumentCatalog::builtin().resolve("GBP/USD").unwrap();

    // user has typed account and entry only
    let proposal = TradeProposal::from_fields("5000", "1", "1.2650", "", "").unwrap();
    assert!(calculator.compute(&instrument, &proposal).is_zeroed());
    assert!(matches!(
        calculator.evaluate(&instrument, &proposal),
        Err(Unavailable::MissingField(_))
    ));
}

#[test]
fn test_crypto_trade() {
    let calculator = TradeRiskCalculator::default();
    let instrument = InstrumentCatalog::builtin().resolve("BTC/USD").unwrap();
    let proposal = TradeProposal::new(dec!(10000), dec!(1), dec!(60000), dec!(59500), dec!(61500));

    let result = calculator.compute(&instrument, &proposal);
    assert_eq!(result.loss_pips, dec!(500));
    assert_eq!(result.profit_pips, dec!(1500));
    assert_eq!(result.pip_value_per_lot, dec!(1));
    assert_eq!(result.lot_size, dec!(0.2));
    assert_eq!(result.potential_profit, dec!(300));
    assert_eq!(result.risk_reward_ratio, dec!(3));
}

#[test]
fn test_silver_trade_rounding() {
    let calculator = TradeRiskCalculator::default();
    let instrument = InstrumentCatalog::builtin().resolve("XAG/USD").unwrap();
    let proposal = TradeProposal::new(dec!(3000), dec!(1.5), dec!(24.37), dec!(24.05), dec!(25.01));

    let result = calculator.compute(&instrument, &proposal);
    // 0.32 * 100 = 32 pips at 50 per lot, risk 45
    assert_eq!(result.loss_pips, dec!(32));
    assert_eq!(result.risk_amount, dec!(45));
    let rounded = result.rounded();
    assert_eq!(rounded.lot_size, dec!(0.0281));
    assert_eq!(rounded.profit_pips, dec!(64));
    assert_eq!(rounded.potential_profit, dec!(90));
    assert_eq!(rounded.risk_reward_ratio, dec!(2));
}

#[test]
fn test_short_trade_matches_long_distances() {
    let calculator = TradeRiskCalculator::default();
    let instrument = InstrumentCatalog::builtin().resolve("EUR/USD").unwrap();
    let long = TradeProposal::new(dec!(10000), dec!(2), dec!(1.1000), dec!(1.0950), dec!(1.1100));
    let short = TradeProposal::new(dec!(10000), dec!(2), dec!(1.1000), dec!(1.1050), dec!(1.0900));

    assert_eq!(
        Direction::detect(long.entry_price, long.take_profit_price),
        Some(Direction::Long)
    );
    assert_eq!(
        Direction::detect(short.entry_price, short.take_profit_price),
        Some(Direction::Short)
    );
    assert_eq!(
        calculator.compute(&instrument, &long),
        calculator.compute(&instrument, &short)
    );
}

#[test]
fn test_pip_table_standalone() {
    let table = PipTable::builtin();
    assert_eq!(table.pip_value_per_lot(Some(AssetClass::Commodity), "XAUUSD"), dec!(100));
    assert_eq!(
        table.pip_distance(Some(AssetClass::Forex), "USD/JPY", dec!(150.000), dec!(149.500)),
        dec!(50)
    );
    assert_eq!(
        table.pip_distance(None, "UNLISTED", dec!(1.5), dec!(1.4)),
        dec!(1000)
    );
}

#[test]
fn test_calculator_is_shareable_across_threads() {
    let calculator = std::sync::Arc::new(TradeRiskCalculator::default());
    let instrument = InstrumentCatalog::builtin().resolve("AUD/USD").unwrap();
    let proposal = TradeProposal::new(dec!(8000), dec!(1), dec!(0.6600), dec!(0.6570), dec!(0.6690));

    let expected = calculator.compute(&instrument, &proposal);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calculator = calculator.clone();
            let instrument = instrument.clone();
            let proposal = proposal.clone();
            std::thread::spawn(move || calculator.compute(&instrument, &proposal))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert!(expected.lot_size > Decimal::ZERO);
}

//! Integration tests for journal records

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trade_risk::journal::TradeRecord;
use trade_risk::risk::Direction;
use trade_risk::{AssetClass, TradeProposal, TradeRiskCalculator};

fn decimal_at(value: &serde_json::Value, name: &str) -> Decimal {
    value["calculatedResults"][name]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("{name} is not a decimal string: {}", value["calculatedResults"][name]))
}

#[test]
fn test_record_body_for_jpy_trade() {
    let calculator = TradeRiskCalculator::default();
    let proposal = TradeProposal::new(dec!(5000), dec!(1), dec!(150.000), dec!(149.500), dec!(151.000));
    let date = Utc.with_ymd_and_hms(2024, 5, 14, 7, 0, 0).unwrap();

    let record = TradeRecord::draft("USD/JPY", &proposal, &calculator)
        .with_notes("BoJ intervention fade")
        .with_trade_date(date);

    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
    assert_eq!(value["symbol"], "USD/JPY");
    assert_eq!(value["assetClass"], "forex");
    assert_eq!(value["direction"], "long");
    assert_eq!(value["notes"], "BoJ intervention fade");
    assert_eq!(value["tradeDate"], "2024-05-14T07:00:00Z");
    assert_eq!(decimal_at(&value, "lossPips"), dec!(50));
    assert_eq!(decimal_at(&value, "pipValuePerLot"), dec!(1000));
    assert_eq!(decimal_at(&value, "lotSize"), dec!(0.001));
}

#[test]
fn test_record_round_trips_through_json() {
    let calculator = TradeRiskCalculator::default();
    let proposal = TradeProposal::new(dec!(12000), dec!(0.5), dec!(0.8600), dec!(0.8630), dec!(0.8510));

    let record = TradeRecord::draft("EUR/GBP", &proposal, &calculator);
    let parsed: TradeRecord = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(parsed.direction, Some(Direction::Short));
    assert_eq!(parsed.asset_class, Some(AssetClass::Forex));
    assert_eq!(parsed.calculated_results, record.calculated_results);
    assert_eq!(parsed.proposal(), record.proposal());
}

#[test]
fn test_high_precision_inputs_round_trip() {
    let calculator = TradeRiskCalculator::default();
    let proposal = TradeProposal::new(
        dec!(12345678901234567.89),
        dec!(0.123456789),
        dec!(1.123456789012345678),
        dec!(1.120000000000000001),
        dec!(1.130000000000000009),
    );

    let record = TradeRecord::draft("EUR/USD", &proposal, &calculator);
    let parsed: TradeRecord = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(parsed.proposal(), proposal);
    assert_eq!(parsed.account_size, Some(dec!(12345678901234567.89)));
    assert_eq!(parsed.entry_price, Some(dec!(1.123456789012345678)));
    assert_eq!(parsed.calculated_results, record.calculated_results);
}

#[test]
fn test_record_accepts_numeric_json_fields() {
    let body = r#"{
        "symbol": "BTC/USD",
        "assetClass": "crypto",
        "direction": "long",
        "accountSize": 50000,
        "riskPercent": 1.5,
        "entryPrice": "65000.5",
        "stopLossPrice": 64000,
        "takeProfitPrice": 68000,
        "tradeDate": "2024-05-14T07:00:00Z",
        "calculatedResults": {
            "riskAmount": 750, "lotSize": 0.7496, "lossPips": 1000.5,
            "profitPips": 2999.5, "pipValuePerLot": 1, "potentialLoss": 750,
            "potentialProfit": 2248.5, "riskRewardRatio": 3
        }
    }"#;

    let record: TradeRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.asset_class, Some(AssetClass::Crypto));
    assert_eq!(record.account_size, Some(dec!(50000)));
    assert_eq!(record.entry_price, Some(dec!(65000.5)));
    assert!(record.notes.is_empty());
}

#[test]
fn test_mislabelled_class_is_not_recorded() {
    let calculator = TradeRiskCalculator::default();
    let proposal = TradeProposal::new(dec!(20000), dec!(1), dec!(2000), dec!(1990), dec!(2030));

    let record = TradeRecord::draft("XAUUSD", &proposal, &calculator);
    let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

    assert_eq!(value["assetClass"], "commodity");
    assert_eq!(decimal_at(&value, "pipValuePerLot"), dec!(100));
    assert_eq!(decimal_at(&value, "lossPips"), dec!(100));
}

//! Manual trade journal records
//!
//! A [`TradeRecord`] is the body the journal backend stores for a manually
//! entered trade: the raw proposal fields with the computed risk figures
//! embedded under `calculatedResults`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::instrument::AssetClass;
use crate::risk::{Direction, TradeProposal, TradeRiskCalculator, TradeRiskResult};

/// A journaled trade ready to be persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub symbol: String,
    /// Catalog class of `symbol`, null when the catalog does not know it
    pub asset_class: Option<AssetClass>,
    /// Inferred from entry and take-profit
    pub direction: Option<Direction>,
    pub account_size: Option<Decimal>,
    pub risk_percent: Option<Decimal>,
    pub entry_price: Option<Decimal>,
    pub stop_loss_price: Option<Decimal>,
    pub take_profit_price: Option<Decimal>,
    pub trade_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
    /// Rounded figures as shown to the user
    pub calculated_results: TradeRiskResult,
}

impl TradeRecord {
    /// Build a record for `proposal`, computing its risk figures
    ///
    /// The class is looked up in the calculator's catalog, the same table the
    /// figures are computed from.
    pub fn draft(symbol: &str, proposal: &TradeProposal, calculator: &TradeRiskCalculator) -> Self {
        let asset_class = calculator.classify(symbol);
        let results = calculator
            .evaluate_symbol(symbol, proposal)
            .unwrap_or_else(|_| TradeRiskResult::zeroed())
            .rounded();
        let direction = Direction::detect(proposal.entry_price, proposal.take_profit_price);

        if let (Some(direction), Some(entry), Some(stop)) =
            (direction, proposal.entry_price, proposal.stop_loss_price)
        {
            if !direction.stop_on_risk_side(entry, stop) {
                tracing::warn!(
                    symbol,
                    %direction,
                    %entry,
                    %stop,
                    "Stop-loss is on the profit side of entry"
                );
            }
        }

        Self {
            symbol: symbol.to_string(),
            asset_class,
            direction,
            account_size: proposal.account_size,
            risk_percent: proposal.risk_percent,
            entry_price: proposal.entry_price,
            stop_loss_price: proposal.stop_loss_price,
            take_profit_price: proposal.take_profit_price,
            trade_date: Utc::now(),
            notes: String::new(),
            calculated_results: results,
        }
    }

    /// Attach free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Override the trade date
    pub fn with_trade_date(mut self, trade_date: DateTime<Utc>) -> Self {
        self.trade_date = trade_date;
        self
    }

    /// Raw proposal fields of this record
    pub fn proposal(&self) -> TradeProposal {
        TradeProposal {
            account_size: self.account_size,
            risk_percent: self.risk_percent,
            entry_price: self.entry_price,
            stop_loss_price: self.stop_loss_price,
            take_profit_price: self.take_profit_price,
        }
    }

    /// Serialize as a JSON request body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

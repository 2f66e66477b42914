//! Risk calculation types

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Caller errors (malformed input that is not simply "incomplete")
#[derive(Debug, Error)]
pub enum CalcError {
    /// Argument violates the API contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Text could not be parsed as a decimal number
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        field: ProposalField,
        value: String,
    },
    /// Asset class name not recognised
    #[error("Unknown asset class: {0}")]
    UnknownAssetClass(String),
}

/// Numeric inputs of a trade proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalField {
    AccountSize,
    RiskPercent,
    EntryPrice,
    StopLossPrice,
    TakeProfitPrice,
}

impl ProposalField {
    /// Wire name as used by the journal form
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalField::AccountSize => "accountSize",
            ProposalField::RiskPercent => "riskPercent",
            ProposalField::EntryPrice => "entryPrice",
            ProposalField::StopLossPrice => "stopLossPrice",
            ProposalField::TakeProfitPrice => "takeProfitPrice",
        }
    }
}

impl fmt::Display for ProposalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw trade inputs, any of which may still be unset
///
/// `None` means the field has not been filled in yet. It is kept apart
/// from an explicit zero so callers can tell the two situations apart,
/// although both make the proposal incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeProposal {
    /// Account equity in quote currency
    pub account_size: Option<Decimal>,
    /// Percent of equity to risk (1.0 = 1%)
    pub risk_percent: Option<Decimal>,
    /// Planned entry price
    pub entry_price: Option<Decimal>,
    /// Stop-loss price
    pub stop_loss_price: Option<Decimal>,
    /// Take-profit price
    pub take_profit_price: Option<Decimal>,
}

impl TradeProposal {
    /// Create a fully populated proposal
    pub fn new(
        account_size: Decimal,
        risk_percent: Decimal,
        entry_price: Decimal,
        stop_loss_price: Decimal,
        take_profit_price: Decimal,
    ) -> Self {
        Self {
            account_size: Some(account_size),
            risk_percent: Some(risk_percent),
            entry_price: Some(entry_price),
            stop_loss_price: Some(stop_loss_price),
            take_profit_price: Some(take_profit_price),
        }
    }

    /// Parse raw form text, in field order: account size, risk percent,
    /// entry, stop-loss, take-profit
    ///
    /// Blank text leaves the field unset. Anything else must be a decimal.
    pub fn from_fields(
        account_size: &str,
        risk_percent: &str,
        entry_price: &str,
        stop_loss_price: &str,
        take_profit_price: &str,
    ) -> Result<Self, CalcError> {
        Ok(Self {
            account_size: parse_field(ProposalField::AccountSize, account_size)?,
            risk_percent: parse_field(ProposalField::RiskPercent, risk_percent)?,
            entry_price: parse_field(ProposalField::EntryPrice, entry_price)?,
            stop_loss_price: parse_field(ProposalField::StopLossPrice, stop_loss_price)?,
            take_profit_price: parse_field(ProposalField::TakeProfitPrice, take_profit_price)?,
        })
    }

    /// Look up a field by name
    pub fn get(&self, field: ProposalField) -> Option<Decimal> {
        match field {
            ProposalField::AccountSize => self.account_size,
            ProposalField::RiskPercent => self.risk_percent,
            ProposalField::EntryPrice => self.entry_price,
            ProposalField::StopLossPrice => self.stop_loss_price,
            ProposalField::TakeProfitPrice => self.take_profit_price,
        }
    }
}

fn parse_field(field: ProposalField, raw: &str) -> Result<Option<Decimal>, CalcError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| CalcError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

/// Why a proposal could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// A required field is unset
    MissingField(ProposalField),
    /// A required field is zero or negative
    NonPositiveField(ProposalField),
    /// Instrument symbol is empty
    MissingSymbol,
    /// Symbol is not in any catalog table
    UnknownInstrument(String),
    /// Inputs exceed decimal range
    Overflow,
}

impl Unavailable {
    /// Short label for metrics
    pub fn label(&self) -> &'static str {
        match self {
            Unavailable::MissingField(_) => "missing_field",
            Unavailable::NonPositiveField(_) => "non_positive_field",
            Unavailable::MissingSymbol => "missing_symbol",
            Unavailable::UnknownInstrument(_) => "unknown_instrument",
            Unavailable::Overflow => "overflow",
        }
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::MissingField(field) => write!(f, "{} is not set", field),
            Unavailable::NonPositiveField(field) => write!(f, "{} must be positive", field),
            Unavailable::MissingSymbol => write!(f, "No instrument symbol"),
            Unavailable::UnknownInstrument(symbol) => write!(f, "Unknown instrument {}", symbol),
            Unavailable::Overflow => write!(f, "Values out of range"),
        }
    }
}

/// Derived risk/reward figures for a proposal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRiskResult {
    /// accountSize * riskPercent / 100
    pub risk_amount: Decimal,
    /// Pips between entry and stop-loss
    pub loss_pips: Decimal,
    /// Pips between entry and take-profit
    pub profit_pips: Decimal,
    /// Value of one pip for one standard lot
    pub pip_value_per_lot: Decimal,
    /// Position size in lots
    pub lot_size: Decimal,
    /// Always equal to `risk_amount`
    pub potential_loss: Decimal,
    /// Profit if take-profit is hit
    pub potential_profit: Decimal,
    /// potential_profit / potential_loss
    pub risk_reward_ratio: Decimal,
}

impl TradeRiskResult {
    /// The all-zero result returned for incomplete input
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Whether every figure is zero
    pub fn is_zeroed(&self) -> bool {
        *self == Self::zeroed()
    }

    /// Display precision: money and ratio 2 dp, lots 4 dp, pips 1 dp
    pub fn rounded(&self) -> Self {
        Self {
            risk_amount: round(self.risk_amount, 2),
            loss_pips: round(self.loss_pips, 1),
            profit_pips: round(self.profit_pips, 1),
            pip_value_per_lot: self.pip_value_per_lot,
            lot_size: round(self.lot_size, 4),
            potential_loss: round(self.potential_loss, 2),
            potential_profit: round(self.potential_profit, 2),
            risk_reward_ratio: round(self.risk_reward_ratio, 2),
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

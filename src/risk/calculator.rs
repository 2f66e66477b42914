//! Trade risk calculator
//!
//! Turns a [`TradeProposal`] into a [`TradeRiskResult`]: risk amount, pip
//! distances, lot size and the profit/loss projection. Called on every form
//! change, so incomplete input never fails; it degrades to the zeroed result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::instrument::{AssetClass, Instrument, InstrumentCatalog};
use crate::telemetry::{record_calculation, CalculationOutcome};

use super::pip::PipTable;
use super::types::{ProposalField, TradeProposal, TradeRiskResult, Unavailable};

/// Fields that must be set and strictly positive
const REQUIRED: [ProposalField; 4] = [
    ProposalField::AccountSize,
    ProposalField::EntryPrice,
    ProposalField::StopLossPrice,
    ProposalField::TakeProfitPrice,
];

/// Stateless risk calculator over a catalog and pip table
#[derive(Debug, Clone, Default)]
pub struct TradeRiskCalculator {
    catalog: InstrumentCatalog,
    pips: PipTable,
}

impl TradeRiskCalculator {
    /// Create a calculator with custom tables
    pub fn new(catalog: InstrumentCatalog, pips: PipTable) -> Self {
        Self { catalog, pips }
    }

    /// Symbol catalog in use
    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    /// Pip table in use
    pub fn pips(&self) -> &PipTable {
        &self.pips
    }

    /// Classify a symbol against the catalog
    pub fn classify(&self, symbol: &str) -> Option<AssetClass> {
        self.catalog.classify(symbol)
    }

    /// Risk figures for a proposal, zeroed when it cannot be evaluated
    pub fn compute(&self, instrument: &Instrument, proposal: &TradeProposal) -> TradeRiskResult {
        self.evaluate(instrument, proposal)
            .unwrap_or_else(|_| TradeRiskResult::zeroed())
    }

    /// Risk figures for a proposal, or the reason they are unavailable
    ///
    /// The instrument's class is re-derived from the catalog; a symbol the
    /// catalog does not know is unavailable even if the caller supplied a class.
    pub fn evaluate(
        &self,
        instrument: &Instrument,
        proposal: &TradeProposal,
    ) -> Result<TradeRiskResult, Unavailable> {
        self.evaluate_symbol(&instrument.symbol, proposal)
    }

    /// Like [`TradeRiskCalculator::evaluate`] for a symbol not yet classified
    pub fn evaluate_symbol(
        &self,
        symbol: &str,
        proposal: &TradeProposal,
    ) -> Result<TradeRiskResult, Unavailable> {
        let outcome = self.evaluate_inner(symbol, proposal);

        match &outcome {
            Ok(result) => {
                tracing::debug!(
                    symbol,
                    risk_amount = %result.risk_amount,
                    lot_size = %result.lot_size,
                    rr = %result.risk_reward_ratio,
                    "Trade risk computed"
                );
                record_calculation(CalculationOutcome::Computed);
            }
            Err(reason) => {
                tracing::debug!(symbol, %reason, "Trade risk unavailable");
                record_calculation(CalculationOutcome::Unavailable(reason.label()));
            }
        }

        outcome
    }

    fn evaluate_inner(
        &self,
        symbol: &str,
        proposal: &TradeProposal,
    ) -> Result<TradeRiskResult, Unavailable> {
        for field in REQUIRED {
            match proposal.get(field) {
                None => return Err(Unavailable::MissingField(field)),
                Some(value) if value <= Decimal::ZERO => {
                    return Err(Unavailable::NonPositiveField(field))
                }
                Some(_) => {}
            }
        }

        if symbol.is_empty() {
            return Err(Unavailable::MissingSymbol);
        }
        let asset_class = self
            .catalog
            .classify(symbol)
            .ok_or_else(|| Unavailable::UnknownInstrument(symbol.to_string()))?;

        // checked above
        let account_size = proposal.account_size.unwrap_or_default();
        let entry = proposal.entry_price.unwrap_or_default();
        let stop_loss = proposal.stop_loss_price.unwrap_or_default();
        let take_profit = proposal.take_profit_price.unwrap_or_default();
        let risk_percent = proposal.risk_percent.unwrap_or_default();

        self.figures(
            asset_class,
            symbol,
            account_size,
            risk_percent,
            entry,
            stop_loss,
            take_profit,
        )
        .ok_or(Unavailable::Overflow)
    }

    #[allow(clippy::too_many_arguments)]
    fn figures(
        &self,
        asset_class: AssetClass,
        symbol: &str,
        account_size: Decimal,
        risk_percent: Decimal,
        entry: Decimal,
        stop_loss: Decimal,
        take_profit: Decimal,
    ) -> Option<TradeRiskResult> {
        let class = Some(asset_class);

        let risk_amount = account_size.checked_mul(risk_percent)?.checked_div(dec!(100))?;
        let loss_pips = self.pips.checked_pip_distance(class, symbol, entry, stop_loss)?;
        let profit_pips = self.pips.checked_pip_distance(class, symbol, entry, take_profit)?;
        let pip_value = self.pips.pip_value_per_lot(class, symbol);

        let lot_size = if loss_pips > Decimal::ZERO && pip_value > Decimal::ZERO {
            risk_amount
                .checked_div(loss_pips.checked_mul(pip_value)?)?
                .max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        let potential_loss = risk_amount;
        let potential_profit = profit_pips
            .checked_mul(pip_value)?
            .checked_mul(lot_size)?
            .max(Decimal::ZERO);

        let risk_reward_ratio = if potential_profit > Decimal::ZERO && !potential_loss.is_zero() {
            potential_profit.checked_div(potential_loss)?
        } else {
            Decimal::ZERO
        };

        Some(TradeRiskResult {
            risk_amount,
            loss_pips,
            profit_pips,
            pip_value_per_lot: pip_value,
            lot_size,
            potential_loss,
            potential_profit,
            risk_reward_ratio,
        })
    }
}

//! Calc command implementation

use clap::Args;

use super::{OutputFormat, TradeArgs};
use crate::config::Config;
use crate::instrument::AssetClass;
use crate::risk::{Direction, TradeRiskResult, Unavailable};

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub trade: TradeArgs,

    /// Output format: table or json
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Outcome of `calc` before printing
#[derive(Debug, Clone, PartialEq)]
pub struct CalcReport {
    pub symbol: String,
    /// None when the configured catalog does not know the symbol
    pub asset_class: Option<AssetClass>,
    pub direction: Option<Direction>,
    /// Rounded figures, zeroed when `unavailable` is set
    pub result: TradeRiskResult,
    pub unavailable: Option<Unavailable>,
}

impl CalcArgs {
    pub fn report(&self, config: &Config) -> CalcReport {
        let calculator = config.calculator();
        let symbol = self.trade.symbol.as_str();
        let proposal = self.trade.proposal(config);

        let (result, unavailable) = match calculator.evaluate_symbol(symbol, &proposal) {
            Ok(result) => (result.rounded(), None),
            Err(reason) => (TradeRiskResult::zeroed(), Some(reason)),
        };

        CalcReport {
            symbol: symbol.to_string(),
            asset_class: calculator.classify(symbol),
            direction: Direction::detect(proposal.entry_price, proposal.take_profit_price),
            result,
            unavailable,
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let report = self.report(config);
        let result = &report.result;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
            OutputFormat::Table => {
                match report.asset_class {
                    Some(class) => println!("{} ({})", report.symbol, class),
                    None => println!("{} (unknown)", report.symbol),
                }
                if let Some(direction) = report.direction {
                    println!("  Direction:        {}", direction);
                }
                if let Some(reason) = &report.unavailable {
                    println!("  Unavailable:      {}", reason);
                }
                println!("  Risk amount:      {}", result.risk_amount);
                println!("  Loss pips:        {}", result.loss_pips);
                println!("  Profit pips:      {}", result.profit_pips);
                println!("  Pip value / lot:  {}", result.pip_value_per_lot);
                println!("  Lot size:         {}", result.lot_size);
                println!("  Potential loss:   {}", result.potential_loss);
                println!("  Potential profit: {}", result.potential_profit);
                println!("  Risk:Reward:      1:{}", result.risk_reward_ratio);
            }
        }

        if let Some(reason) = &report.unavailable {
            tracing::info!(symbol = %report.symbol, %reason, "Calculation unavailable");
        }
        Ok(())
    }
}

//! Record command implementation

use clap::Args;

use super::TradeArgs;
use crate::config::Config;
use crate::journal::TradeRecord;

#[derive(Args, Debug)]
pub struct RecordArgs {
    #[command(flatten)]
    pub trade: TradeArgs,

    /// Free-text notes stored with the trade
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl RecordArgs {
    /// Record body for the given trade
    pub fn build(&self, config: &Config) -> TradeRecord {
        let calculator = config.calculator();
        let proposal = self.trade.proposal(config);
        TradeRecord::draft(&self.trade.symbol, &proposal, &calculator).with_notes(&self.notes)
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        println!("{}", self.build(config).to_json()?);
        Ok(())
    }
}

//! Pip command implementation

use clap::Args;
use rust_decimal::Decimal;

use crate::config::Config;
use crate::instrument::AssetClass;

#[derive(Args, Debug)]
pub struct PipArgs {
    /// Instrument symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Asset class, instead of looking the symbol up
    #[arg(long)]
    pub class: Option<AssetClass>,

    /// First price for a pip distance
    #[arg(long, requires = "to")]
    pub from: Option<Decimal>,

    /// Second price for a pip distance
    #[arg(long, requires = "from")]
    pub to: Option<Decimal>,
}

impl PipArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let pips = config.pip_table();
        let class = self
            .class
            .or_else(|| config.instrument_catalog().classify(&self.symbol));

        let class_name = class.map_or("unknown", |c| c.as_str());
        println!("{} ({})", self.symbol, class_name);
        println!("  Pip value / lot: {}", pips.pip_value_per_lot(class, &self.symbol));
        println!("  Multiplier:      {}", pips.multiplier(class, &self.symbol));

        if let (Some(from), Some(to)) = (self.from, self.to) {
            let distance = pips.pip_distance(class, &self.symbol, from, to);
            println!("  Distance:        {} pips", distance.round_dp(1));
        }
        Ok(())
    }
}

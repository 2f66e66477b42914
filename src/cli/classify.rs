//! Classify command implementation

use clap::Args;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Instrument symbol, matched exactly
    #[arg(short, long)]
    pub symbol: String,
}

impl ClassifyArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match config.instrument_catalog().classify(&self.symbol) {
            Some(class) => println!("{}: {}", self.symbol, class),
            None => anyhow::bail!("Unknown instrument: {}", self.symbol),
        }
        Ok(())
    }
}

//! CLI interface for trade-risk
//!
//! Provides subcommands for:
//! - `calc`: Position size and risk/reward for a trade
//! - `classify`: Asset class of a symbol
//! - `pip`: Pip value and pip distance for a symbol
//! - `record`: Journal record body for a trade
//! - `config`: Show effective configuration

mod calc;
mod classify;
mod pip;
mod record;

pub use calc::{CalcArgs, CalcReport};
pub use classify::ClassifyArgs;
pub use pip::PipArgs;
pub use record::RecordArgs;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::instrument::AssetClass;
use crate::risk::TradeProposal;

#[derive(Parser, Debug)]
#[command(name = "trade-risk")]
#[command(about = "Pip value, position sizing and risk/reward for journaled trades")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Position size and risk/reward for a trade
    Calc(CalcArgs),
    /// Asset class of a symbol
    Classify(ClassifyArgs),
    /// Pip value and pip distance for a symbol
    Pip(PipArgs),
    /// Journal record body for a trade
    Record(RecordArgs),
    /// Show effective configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Trade inputs shared by `calc` and `record`
#[derive(Args, Debug, Clone)]
pub struct TradeArgs {
    /// Instrument symbol, e.g. EUR/USD
    #[arg(short, long)]
    pub symbol: String,

    /// Account size (falls back to config defaults)
    #[arg(long)]
    pub account_size: Option<Decimal>,

    /// Percent of account to risk (falls back to config defaults)
    #[arg(long)]
    pub risk_percent: Option<Decimal>,

    /// Entry price
    #[arg(long)]
    pub entry: Option<Decimal>,

    /// Stop-loss price
    #[arg(long)]
    pub stop_loss: Option<Decimal>,

    /// Take-profit price
    #[arg(long)]
    pub take_profit: Option<Decimal>,
}

impl TradeArgs {
    /// Proposal with config defaults filled in for unset fields
    pub fn proposal(&self, config: &Config) -> TradeProposal {
        TradeProposal {
            account_size: self.account_size.or(config.defaults.account_size),
            risk_percent: self.risk_percent.or(Some(config.defaults.risk_percent)),
            entry_price: self.entry,
            stop_loss_price: self.stop_loss,
            take_profit_price: self.take_profit,
        }
    }
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match &self.command {
            Commands::Calc(args) => args.execute(config),
            Commands::Classify(args) => args.execute(config),
            Commands::Pip(args) => args.execute(config),
            Commands::Record(args) => args.execute(config),
            Commands::Config => {
                print_config(config);
                Ok(())
            }
        }
    }
}

fn print_config(config: &Config) {
    let catalog = config.instrument_catalog();
    let pips = config.pip_table();

    println!("Current configuration:");
    println!(
        "  Telemetry: level={} format={:?}",
        config.telemetry.log_level, config.telemetry.log_format
    );
    println!("  Default risk: {}%", config.defaults.risk_percent);
    match config.defaults.account_size {
        Some(size) => println!("  Default account size: {}", size),
        None => println!("  Default account size: (none)"),
    }
    println!("  Catalog v{}:", catalog.version);
    for class in AssetClass::ALL {
        println!("    {:<10} {} symbols", class, catalog.len(class));
    }
    println!(
        "  Pip table v{}: {} rules ({} from config)",
        pips.version,
        pips.rules().len(),
        config.pip_rules.len()
    );
}

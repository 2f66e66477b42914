use clap::Parser;
use trade_risk::cli::Cli;
use trade_risk::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(trade_risk::config::ConfigError::Io(e)) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize telemetry
    trade_risk::telemetry::init_telemetry(&config.telemetry)?;
    tracing::debug!(config = %cli.config, "Configuration loaded");

    cli.execute(&config)
}

//! Telemetry module
//!
//! Logging and calculation metrics

mod logging;
mod metrics;

pub use self::logging::{init_logging, LogFormat};
pub use self::metrics::{record_calculation, CalculationOutcome, CALCULATIONS_TOTAL, UNAVAILABLE_TOTAL};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}

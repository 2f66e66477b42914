//! trade-risk: position sizing and risk/reward engine for a manual trading journal
//!
//! This library provides the core components for:
//! - Classifying symbols into asset classes from curated tables
//! - Pip value and pip distance rules per asset class
//! - Lot sizing from account size and risk percent
//! - Profit/loss projection and risk:reward ratio
//! - Trade direction detection
//! - Journal record bodies with embedded results
//! - Configuration, logging and metrics

pub mod cli;
pub mod config;
pub mod instrument;
pub mod journal;
pub mod risk;
pub mod telemetry;

pub use instrument::{AssetClass, Instrument, InstrumentCatalog};
pub use risk::{TradeProposal, TradeRiskCalculator, TradeRiskResult};

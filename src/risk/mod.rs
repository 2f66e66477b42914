//! Risk module
//!
//! Pip rules, position sizing and risk/reward projection for journaled trades

mod calculator;
mod direction;
mod pip;
mod types;

pub use calculator::TradeRiskCalculator;
pub use direction::Direction;
pub use pip::{PipRule, PipTable, DEFAULT_PIP_MULTIPLIER, DEFAULT_PIP_VALUE};
pub use types::{CalcError, ProposalField, TradeProposal, TradeRiskResult, Unavailable};

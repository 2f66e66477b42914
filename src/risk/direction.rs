//! Trade direction detection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a journaled trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Profits when price rises
    Long,
    /// Profits when price falls
    Short,
}

impl Direction {
    /// Infer direction from entry and take-profit alone
    ///
    /// Long when the target is above entry, short otherwise (including a
    /// target equal to entry). The stop-loss is not consulted;
    /// use [`Direction::stop_on_risk_side`] to flag inconsistent setups.
    pub fn detect(entry: Option<Decimal>, take_profit: Option<Decimal>) -> Option<Self> {
        match (entry, take_profit) {
            (Some(entry), Some(take_profit)) if take_profit > entry => Some(Direction::Long),
            (Some(_), Some(_)) => Some(Direction::Short),
            _ => None,
        }
    }

    /// Get the opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Long => Direction::Short,
            Direction::Short => Direction::Long,
        }
    }

    /// Whether the stop-loss sits on the losing side of entry
    pub fn stop_on_risk_side(&self, entry: Decimal, stop_loss: Decimal) -> bool {
        match self {
            Direction::Long => stop_loss < entry,
            Direction::Short => stop_loss > entry,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Calculation counters
//!
//! Recorded through the `metrics` facade; they are no-ops until the host
//! application installs a recorder.

/// Total risk evaluations
pub const CALCULATIONS_TOTAL: &str = "trade_risk_calculations_total";

/// Evaluations that fell back to the zeroed result, labelled by reason
pub const UNAVAILABLE_TOTAL: &str = "trade_risk_unavailable_total";

/// Result of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationOutcome {
    /// Figures were computed
    Computed,
    /// Zeroed, with the reason label
    Unavailable(&'static str),
}

/// Count one evaluation
pub fn record_calculation(outcome: CalculationOutcome) {
    ::metrics::counter!(CALCULATIONS_TOTAL).increment(1);

    if let CalculationOutcome::Unavailable(reason) = outcome {
        ::metrics::counter!(UNAVAILABLE_TOTAL, "reason" => reason).increment(1);
    }
}


// File: crates/chart-touch/src/error.rs
// Summary: Construction-time validation errors for chart data.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("value {0} is not finite")]
    NonFiniteValue(f64),
    #[error("pie segment value {0} is negative")]
    NegativeSegment(f64),
    #[error("pie data set has a zero total")]
    ZeroTotal,
    #[error("doughnut inner radius fraction {0} must lie in [0, 1)")]
    InnerRadius(f64),
}

pub type Result<T> = std::result::Result<T, ChartError>;

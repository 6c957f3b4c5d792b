// File: crates/livechart-core/src/error.rs
// Summary: Construction-time validation errors for datasets and style values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Color literal is not `#RRGGBB` or `#AARRGGBB`.
    #[error("invalid color literal `{0}`")]
    InvalidColor(String),
    #[error("data point {index} is not finite: ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
}

pub type ChartResult<T> = Result<T, ChartError>;

//! Validation Error Types

use thiserror::Error;

/// Invalid input rejected before any transform runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Reduction over a signal that has no samples
    #[error("Invalid input: {operation} requires a non-empty signal")]
    EmptySignal { operation: &'static str },

    /// NaN or infinite sample
    #[error("Invalid input: non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },

    /// Finite samples whose intermediate values overflow f64
    #[error("Invalid input: {stage} overflowed at index {index}")]
    Overflow { stage: &'static str, index: usize },

    /// Parameter out of allowed range
    #[error("Invalid input: {field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

//! Signal and Parameter Validation

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Smoothing window valid range (samples)
    pub window_range: (f64, f64),
    /// Normalization floor valid range
    pub eps_range: (f64, f64),
    /// Router threshold valid range
    pub threshold_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            window_range: (1.0, usize::MAX as f64),
            eps_range: (f64::MIN_POSITIVE, f64::MAX),
            threshold_range: (f64::MIN, f64::MAX),
        }
    }
}

/// Validator for input signals and transform parameters
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range.
    ///
    /// NaN never lies inside a range.
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value >= range.0 && value <= range.1 {
            Ok(())
        } else {
            warn!("Rejected {} = {}", field, value);
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        }
    }

    /// Validate smoothing window
    pub fn validate_window(&self, window: usize) -> Result<(), ValidationError> {
        self.validate_range("window", window as f64, self.config.window_range)
    }

    /// Validate normalization floor
    pub fn validate_eps(&self, eps: f64) -> Result<(), ValidationError> {
        self.validate_range("eps", eps, self.config.eps_range)
    }

    /// Validate router threshold
    pub fn validate_threshold(&self, threshold: f64) -> Result<(), ValidationError> {
        self.validate_range("threshold", threshold, self.config.threshold_range)
    }

    /// Reject NaN and infinite samples
    pub fn validate_finite(&self, signal: &[f64]) -> Result<(), ValidationError> {
        match signal.iter().position(|v| !v.is_finite()) {
            Some(index) => {
                warn!("Rejected non-finite sample at index {}", index);
                Err(ValidationError::NonFinite {
                    index,
                    value: signal[index],
                })
            }
            None => Ok(()),
        }
    }

    /// Reject intermediate values that overflowed to infinity
    pub fn validate_no_overflow(
        &self,
        stage: &'static str,
        values: &[f64],
    ) -> Result<(), ValidationError> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => {
                warn!("{} overflowed at index {}", stage, index);
                Err(ValidationError::Overflow { stage, index })
            }
            None => Ok(()),
        }
    }

    /// Reject signals a reduction cannot run over
    pub fn validate_non_empty(
        &self,
        operation: &'static str,
        signal: &[f64],
    ) -> Result<(), ValidationError> {
        if signal.is_empty() {
            warn!("{} called with an empty signal", operation);
            Err(ValidationError::EmptySignal { operation })
        } else {
            Ok(())
        }
    }
}

//! Structural feature configuration

use data_validator::{ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Smallest smoothing width actually applied
pub const MIN_SMOOTHING_WIDTH: usize = 2;

/// Structural feature configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralConfig {
    /// Moving-average width (samples), raised to 2 when smaller
    pub window: usize,

    /// Floor on the normalization denominator
    pub eps: f64,
}

impl Default for StructuralConfig {
    fn default() -> Self {
        Self {
            window: 32,
            eps: 1e-12,
        }
    }
}

impl StructuralConfig {
    /// Create a validated config
    pub fn new(window: usize, eps: f64) -> Result<Self, ValidationError> {
        let config = Self { window, eps };
        config.validate()?;
        Ok(config)
    }

    /// Config with the given window and the default floor
    pub fn with_window(window: usize) -> Result<Self, ValidationError> {
        Self::new(window, Self::default().eps)
    }

    /// Check `window >= 1` and `eps > 0`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let validator = Validator::default();
        validator.validate_window(self.window)?;
        validator.validate_eps(self.eps)
    }

    /// Width the smoother runs with
    pub fn smoothing_width(&self) -> usize {
        self.window.max(MIN_SMOOTHING_WIDTH)
    }
}

//! Energy and Harmonic Signal Features
//!
//! Length-preserving transforms over a raw signal. They are independent of
//! [`StructuralConfig`](crate::StructuralConfig) and never fail: an empty
//! signal maps to an empty vector and non-finite samples propagate.

use crate::statistics::cumulative_mean;

/// Energy-like log compression, `ln(1 + |x|)`
pub fn energy_feature(signal: &[f64]) -> Vec<f64> {
    signal.iter().map(|v| v.abs().ln_1p()).collect()
}

/// Slow harmonic structure as the running mean of the signal
pub fn harmonic_feature(signal: &[f64]) -> Vec<f64> {
    cumulative_mean(signal)
}

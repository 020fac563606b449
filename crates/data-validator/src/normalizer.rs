//! Percentile-based Robust Normalization

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Percentile of `values` with linear interpolation between closest ranks.
///
/// `p` is in percent. Returns `None` for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let frac = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Normalizer mapping a sequence into [0, 1] between two of its percentiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RobustNormalizer {
    /// Percentile mapped to 0
    pub lower_percentile: f64,
    /// Percentile mapped to 1
    pub upper_percentile: f64,
    /// Floor on the percentile spread
    pub eps: f64,
}

impl Default for RobustNormalizer {
    fn default() -> Self {
        Self {
            lower_percentile: 5.0,
            upper_percentile: 95.0,
            eps: 1e-12,
        }
    }
}

impl RobustNormalizer {
    /// Create a 5th/95th percentile normalizer with the given floor
    pub fn new(eps: f64) -> Self {
        Self {
            eps,
            ..Default::default()
        }
    }

    /// Normalize and clip every value into [0, 1]
    pub fn normalize(&self, values: &[f64]) -> Vec<f64> {
        let (Some(lo), Some(hi)) = (
            percentile(values, self.lower_percentile),
            percentile(values, self.upper_percentile),
        ) else {
            return Vec::new();
        };

        let denom = self.eps.max(hi - lo);
        debug!("Robust bounds: lo={}, hi={}, denom={}", lo, hi, denom);

        values
            .iter()
            .map(|&v| ((v - lo) / denom).clamp(0.0, 1.0))
            .collect()
    }
}

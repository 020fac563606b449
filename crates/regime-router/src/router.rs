//! Peak-amplitude Threshold Router

use data_validator::{ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Peak amplitude above which a signal is routed to crisis
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Regime a signal is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteLabel {
    Normal,
    Crisis,
}

impl RouteLabel {
    /// Upper-case label name
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteLabel::Normal => "NORMAL",
            RouteLabel::Crisis => "CRISIS",
        }
    }
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot peak-amplitude classifier, built only through [`Router::new`]
#[derive(Debug, Clone, Serialize)]
pub struct Router {
    /// Peak amplitude threshold (strict)
    threshold: f64,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Router {
    /// Create a router; the threshold must be finite
    pub fn new(threshold: f64) -> Result<Self, ValidationError> {
        Validator::default().validate_threshold(threshold)?;
        Ok(Self { threshold })
    }

    /// Threshold in use
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Route a signal. `Crisis` only when the peak strictly exceeds the threshold.
    pub fn route(&self, signal: &[f64]) -> Result<RouteLabel, ValidationError> {
        let validator = Validator::default();
        validator.validate_non_empty("route", signal)?;
        validator.validate_finite(signal)?;

        let peak = signal.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let label = if peak > self.threshold {
            RouteLabel::Crisis
        } else {
            RouteLabel::Normal
        };

        debug!(
            "Routed signal: peak={}, threshold={}, label={}",
            peak, self.threshold, label
        );
        Ok(label)
    }
}

/// Route `signal` against `threshold`
pub fn route(signal: &[f64], threshold: f64) -> Result<RouteLabel, ValidationError> {
    Router::new(threshold)?.route(signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spike_routes_to_crisis() {
        assert_eq!(route(&[0.2, 1.5, 0.1], 1.0).unwrap(), RouteLabel::Crisis);
    }

    #[test]
    fn test_quiet_signal_routes_to_normal() {
        assert_eq!(route(&[0.2, 0.5, -0.3], 1.0).unwrap(), RouteLabel::Normal);
    }

    #[test]
    fn test_negative_peak_counts() {
        assert_eq!(route(&[0.1, -2.0], 1.0).unwrap(), RouteLabel::Crisis);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(route(&[0.3, -1.0, 1.0], 1.0).unwrap(), RouteLabel::Normal);
        assert_eq!(route(&[0.25], 0.25).unwrap(), RouteLabel::Normal);
    }

    #[test]
    fn test_default_threshold() {
        let router = Router::default();
        assert_eq!(router.threshold(), 1.0);
        assert_eq!(router.route(&[1.01]).unwrap(), RouteLabel::Crisis);
    }

    #[test]
    fn test_negative_threshold_always_crisis() {
        assert_eq!(route(&[0.0], -0.5).unwrap(), RouteLabel::Crisis);
    }

    #[test]
    fn test_empty_signal_rejected() {
        assert_eq!(
            route(&[], 1.0).unwrap_err(),
            ValidationError::EmptySignal { operation: "route" }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(route(&[0.1, f64::NAN], 1.0).is_err());
        assert!(route(&[f64::INFINITY], 1.0).is_err());
        assert!(Router::new(f64::NAN).is_err());
    }

    #[test]
    fn test_router_only_built_with_finite_threshold() {
        assert!(Router::new(f64::INFINITY).is_err());
        assert!(Router::new(f64::NEG_INFINITY).is_err());

        let router = Router::new(2.5).unwrap();
        let json = serde_json::to_value(&router).unwrap();
        assert_eq!(json["threshold"], 2.5);
    }

    #[test]
    fn test_label_display_and_serde() {
        assert_eq!(RouteLabel::Crisis.to_string(), "CRISIS");
        assert_eq!(
            serde_json::to_string(&RouteLabel::Normal).unwrap(),
            "\"NORMAL\""
        );
    }
}

//! Route-then-describe Regime Pipeline

use crate::router::{RouteLabel, Router};
use data_validator::ValidationError;
use feature_engine::{energy_feature, harmonic_feature};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Route of a signal together with its secondary features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Regime the signal was routed to
    pub route: RouteLabel,
    /// `ln(1 + |x|)` per sample
    pub energy_feature: Vec<f64>,
    /// Running mean per sample
    pub harmonic_feature: Vec<f64>,
}

/// Pipeline routing a signal and extracting energy and harmonic features
#[derive(Debug, Clone, Default)]
pub struct RegimePipeline {
    router: Router,
}

impl RegimePipeline {
    /// Create a pipeline around a router
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Router in use
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Run the pipeline over one signal
    pub fn run(&self, signal: &[f64]) -> Result<PipelineOutput, ValidationError> {
        let route = self.router.route(signal)?;

        let output = PipelineOutput {
            route,
            energy_feature: energy_feature(signal),
            harmonic_feature: harmonic_feature(signal),
        };

        if route == RouteLabel::Crisis {
            info!("Signal of {} samples routed to {}", signal.len(), route);
        }
        Ok(output)
    }
}

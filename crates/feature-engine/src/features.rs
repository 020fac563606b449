//! Structural Feature Extraction and Scoring

use crate::config::StructuralConfig;
use crate::smoothing::MovingAverage;
use crate::statistics::{abs_differences, mean_square};
use data_validator::{RobustNormalizer, ValidationError, Validator};
use tracing::debug;

/// Normalized local-variation signal, every value in [0, 1]
pub type FeatureVector = Vec<f64>;

/// Feature extractor built from a validated config
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    /// Config it was built from
    config: StructuralConfig,
    /// Difference smoother
    smoother: MovingAverage,
    /// 5th/95th percentile normalizer
    normalizer: RobustNormalizer,
    /// Input checks
    validator: Validator,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(config: StructuralConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        debug!(
            "Creating feature extractor: window={}, smoothing_width={}, eps={}",
            config.window,
            config.smoothing_width(),
            config.eps
        );
        Ok(Self {
            config,
            smoother: MovingAverage::new(config.smoothing_width()),
            normalizer: RobustNormalizer::new(config.eps),
            validator: Validator::default(),
        })
    }

    /// Config in use
    pub fn config(&self) -> StructuralConfig {
        self.config
    }

    /// Extract the structural feature of a sequence.
    ///
    /// Sequences shorter than two samples give an empty vector; otherwise
    /// the output has one value per adjacent pair.
    pub fn extract(&self, sequence: &[f64]) -> Result<FeatureVector, ValidationError> {
        if sequence.len() < 2 {
            debug!("Sequence of {} samples, no differences", sequence.len());
            return Ok(Vec::new());
        }
        self.validator.validate_finite(sequence)?;

        let diffs = abs_differences(sequence);
        let smoothed = self.smoother.smooth(&diffs);
        // huge finite samples can sum past f64::MAX
        self.validator.validate_no_overflow("smoothing", &smoothed)?;

        debug!(
            "Extracting features: samples={}, width={}",
            sequence.len(),
            self.smoother.width()
        );

        Ok(self.normalizer.normalize(&smoothed))
    }

    /// Stability score of a sequence, in [0, 1]
    pub fn score(&self, sequence: &[f64]) -> Result<f64, ValidationError> {
        let features = self.extract(sequence)?;
        Ok(score_features(&features))
    }
}

/// Extract the structural feature of `sequence`
pub fn extract_feature(
    sequence: &[f64],
    config: StructuralConfig,
) -> Result<FeatureVector, ValidationError> {
    FeatureExtractor::new(config)?.extract(sequence)
}

/// Stability score of `sequence`: mean squared feature value
pub fn score(sequence: &[f64], config: StructuralConfig) -> Result<f64, ValidationError> {
    FeatureExtractor::new(config)?.score(sequence)
}

/// Reduce a precomputed feature vector to a score; empty gives 0.0
pub fn score_features(features: &[f64]) -> f64 {
    mean_square(features)
}

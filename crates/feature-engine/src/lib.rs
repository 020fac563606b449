//! Structural Feature Engine
//!
//! Local-variation feature extraction, stability scoring, and the secondary
//! energy and harmonic signal features.

mod config;
mod features;
mod secondary;
mod smoothing;
mod statistics;

pub use config::{StructuralConfig, MIN_SMOOTHING_WIDTH};
pub use features::{extract_feature, score, score_features, FeatureExtractor, FeatureVector};
pub use secondary::{energy_feature, harmonic_feature};
pub use smoothing::MovingAverage;

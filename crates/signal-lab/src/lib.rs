//! Structural Signal Lab
//!
//! Demo runner for the structural score and the regime pipeline over a toy
//! sequence and seeded synthetic signals.

mod generator;
mod settings;

pub use generator::{GeneratorSpec, SignalGenerator, CRISIS_AMPLITUDE, CRISIS_SPAN};
pub use settings::{LabSettings, DEFAULT_SETTINGS_FILE, ENV_PREFIX};

use data_validator::ValidationError;
use feature_engine::{score, score_features, FeatureExtractor, StructuralConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regime_router::{RegimePipeline, RouteLabel, Router};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Sequence the structural score is demonstrated on
pub const TOY_SEQUENCE: [f64; 8] = [1.0, 2.0, 1.5, 3.0, 2.8, 3.1, 2.9, 3.0];

/// Structural score of the toy sequence
#[derive(Debug, Clone, Serialize)]
pub struct ToyReport {
    pub window: usize,
    pub feature: Vec<f64>,
    pub score: f64,
}

/// Summary of one synthetic signal
#[derive(Debug, Clone, Serialize)]
pub struct SignalReport {
    pub crisis_injected: bool,
    pub samples: usize,
    pub route: RouteLabel,
    pub structural_score: f64,
    pub mean_energy: f64,
    pub final_harmonic: Option<f64>,
}

/// Full demo report
#[derive(Debug, Clone, Serialize)]
pub struct LabReport {
    pub seed: u64,
    pub threshold: f64,
    pub toy: ToyReport,
    pub normal: SignalReport,
    pub crisis: SignalReport,
}

/// Initialize logging; output goes to stderr so stdout carries the report
pub fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the whole demo
pub fn run(settings: &LabSettings) -> Result<LabReport, ValidationError> {
    let toy_config = StructuralConfig::new(settings.toy_window, settings.structural.eps)?;
    let toy_extractor = FeatureExtractor::new(toy_config)?;
    let feature = toy_extractor.extract(&TOY_SEQUENCE)?;
    let toy = ToyReport {
        window: toy_config.window,
        score: score_features(&feature),
        feature,
    };
    info!("Toy structural score: {}", toy.score);

    let pipeline = RegimePipeline::new(Router::new(settings.threshold)?);
    let mut rng = StdRng::seed_from_u64(settings.seed);

    let normal_spec = GeneratorSpec {
        crisis: false,
        ..settings.generator.clone()
    };
    let normal = summarize(&pipeline, settings.structural, &normal_spec, &mut rng)?;
    info!("Normal route: {}", normal.route);

    let crisis = summarize(
        &pipeline,
        settings.structural,
        &settings.generator.with_crisis(),
        &mut rng,
    )?;
    info!("Crisis route: {}", crisis.route);

    Ok(LabReport {
        seed: settings.seed,
        threshold: settings.threshold,
        toy,
        normal,
        crisis,
    })
}

fn summarize(
    pipeline: &RegimePipeline,
    config: StructuralConfig,
    spec: &GeneratorSpec,
    rng: &mut StdRng,
) -> Result<SignalReport, ValidationError> {
    let signal = SignalGenerator::generate(spec, rng);
    let output = pipeline.run(&signal)?;

    let mean_energy =
        output.energy_feature.iter().sum::<f64>() / output.energy_feature.len() as f64;

    Ok(SignalReport {
        crisis_injected: spec.crisis,
        samples: signal.len(),
        route: output.route,
        structural_score: score(&signal, config)?,
        mean_energy,
        final_harmonic: output.harmonic_feature.last().copied(),
    })
}

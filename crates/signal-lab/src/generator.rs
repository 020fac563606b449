//! Synthetic Demo Signals

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Amplitude added to the samples of an injected crisis
pub const CRISIS_AMPLITUDE: f64 = 3.0;

/// Number of samples an injected crisis spans
pub const CRISIS_SPAN: usize = 5;

/// Shape of a generated signal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSpec {
    /// Number of samples
    pub samples: usize,
    /// Standard deviation of the additive Gaussian noise
    pub noise_level: f64,
    /// Inject a spike at the middle of the signal
    pub crisis: bool,
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        Self {
            samples: 200,
            noise_level: 0.2,
            crisis: false,
        }
    }
}

impl GeneratorSpec {
    /// Same shape with a crisis spike
    pub fn with_crisis(&self) -> Self {
        Self {
            crisis: true,
            ..self.clone()
        }
    }
}

/// Sine-plus-noise generator over an injected random source
pub struct SignalGenerator;

impl SignalGenerator {
    /// Two periods of a sine over `samples` points, plus noise and an
    /// optional spike of [`CRISIS_AMPLITUDE`] at `samples / 2`.
    pub fn generate<R: Rng + ?Sized>(spec: &GeneratorSpec, rng: &mut R) -> Vec<f64> {
        let n = spec.samples;
        let step = if n > 1 { 4.0 * PI / (n - 1) as f64 } else { 0.0 };

        let mut signal: Vec<f64> = (0..n)
            .map(|i| (i as f64 * step).sin() + spec.noise_level * standard_normal(rng))
            .collect();

        if spec.crisis {
            let start = n / 2;
            let end = (start + CRISIS_SPAN).min(n);
            for v in &mut signal[start..end] {
                *v += CRISIS_AMPLITUDE;
            }
        }

        signal
    }
}

/// Box-Muller draw from N(0, 1)
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 1 - [0, 1) keeps the log argument away from zero
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

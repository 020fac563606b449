//! Layered demo settings

use crate::generator::GeneratorSpec;
use config::{Config, ConfigError, Environment, File};
use feature_engine::StructuralConfig;
use regime_router::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "signal-lab";

/// Prefix of environment overrides, e.g. `SIGNAL_LAB__STRUCTURAL__WINDOW=8`
pub const ENV_PREFIX: &str = "SIGNAL_LAB";

/// Demo settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSettings {
    /// Max tracing level (`error` .. `trace`)
    pub log_level: String,

    /// Seed for the synthetic signals
    pub seed: u64,

    /// Synthetic signal shape
    pub generator: GeneratorSpec,

    /// Structural feature config
    pub structural: StructuralConfig,

    /// Window used for the toy-sequence score
    pub toy_window: usize,

    /// Router peak threshold
    pub threshold: f64,
}

impl Default for LabSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            seed: 42,
            generator: GeneratorSpec::default(),
            structural: StructuralConfig::default(),
            toy_window: 4,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl LabSettings {
    /// Defaults, then the optional settings file, then environment overrides
    pub fn load(file: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = LabSettings::load("does-not-exist/signal-lab").unwrap();
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.generator.samples, 200);
        assert_eq!(settings.structural.window, 32);
        assert_eq!(settings.toy_window, 4);
        assert_eq!(settings.threshold, 1.0);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal-lab.toml");
        std::fs::write(
            &path,
            "seed = 7\n\n[structural]\nwindow = 8\n\n[generator]\ncrisis = true\n",
        )
        .unwrap();

        let settings = LabSettings::load(path.to_str().unwrap()).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.structural.window, 8);
        assert!(settings.generator.crisis);
        // untouched keys keep their defaults
        assert_eq!(settings.generator.samples, 200);
        assert_eq!(settings.toy_window, 4);
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        // keys no other test asserts on, since the environment is process-wide
        std::env::set_var("SIGNAL_LAB__GENERATOR__NOISE_LEVEL", "0.05");
        std::env::set_var("SIGNAL_LAB__STRUCTURAL__EPS", "0.001");

        let settings = LabSettings::load("does-not-exist/signal-lab");

        std::env::remove_var("SIGNAL_LAB__GENERATOR__NOISE_LEVEL");
        std::env::remove_var("SIGNAL_LAB__STRUCTURAL__EPS");

        let settings = settings.unwrap();
        assert_eq!(settings.generator.noise_level, 0.05);
        assert_eq!(settings.structural.eps, 0.001);
        assert_eq!(settings.generator.samples, 200);
    }
}

//! Structural Signal Lab - Main Entry Point

use anyhow::Context;
use signal_lab::{init_logging, run, LabSettings, DEFAULT_SETTINGS_FILE};
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    let settings_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_FILE.to_string());

    let settings = LabSettings::load(&settings_file)
        .with_context(|| format!("Failed to load settings from {}", settings_file))?;

    let level: Level = settings
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level {:?}", settings.log_level))?;
    init_logging(level);

    info!("=== Structural Signal Lab v{} ===", env!("CARGO_PKG_VERSION"));

    let report = run(&settings).context("Demo run failed")?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

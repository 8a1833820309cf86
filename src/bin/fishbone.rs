// Fishbone scorer command line entry point
//
// Usage: fishbone [quality|range|checksum] < input.txt
// Mode, parallelism and output format also come from FISHBONE_* env vars.

use anyhow::{Context, Result};
use fishbone_scorer::{score_input, Mode, OutputFormat, ScorerConfig};
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fishbone_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ScorerConfig::from_env()?;
    if let Some(mode) = std::env::args().nth(1) {
        config.mode = mode.parse::<Mode>()?;
    }

    tracing::info!("Configuration:");
    tracing::info!("  Mode: {:?}", config.mode);
    tracing::info!("  Parallel: {}", config.parallel);
    tracing::info!("  Format: {:?}", config.format);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read input from stdin")?;

    let report = score_input(&input, &config)
        .with_context(|| format!("Failed to evaluate {:?}", config.mode))?;

    match config.format {
        OutputFormat::Text => println!("{}", report.headline()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

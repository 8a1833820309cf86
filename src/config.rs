//! Scorer configuration
//!
//! Resolution order (later wins):
//!   1. built-in defaults
//!   2. JSON file named by `FISHBONE_CONFIG`
//!   3. `FISHBONE_MODE`, `FISHBONE_PARALLEL`, `FISHBONE_FORMAT`
//!   4. explicit overrides from the command line

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_PATH_VAR: &str = "FISHBONE_CONFIG";
pub const MODE_VAR: &str = "FISHBONE_MODE";
pub const PARALLEL_VAR: &str = "FISHBONE_PARALLEL";
pub const FORMAT_VAR: &str = "FISHBONE_FORMAT";

/// Which evaluation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Quality of a single sword (first input line)
    #[default]
    Quality,
    /// Best minus worst quality across a batch
    Range,
    /// Ranking checksum across a batch
    Checksum,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quality" | "1" => Ok(Mode::Quality),
            "range" | "2" => Ok(Mode::Range),
            "checksum" | "3" => Ok(Mode::Checksum),
            other => bail!("Unknown mode '{}' (expected quality, range or checksum)", other),
        }
    }
}

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bare number
    #[default]
    Text,
    /// Full report as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown output format '{}' (expected text or json)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub mode: Mode,
    /// Build fishbones of a batch on the rayon pool
    pub parallel: bool,
    pub format: OutputFormat,
}

impl ScorerConfig {
    /// Load a config file (missing fields keep their defaults)
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path))
    }

    /// Defaults, then config file, then environment variables
    pub fn from_env() -> Result<Self> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an injectable variable lookup
    pub fn resolve<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => {
                tracing::info!("Loading config: {}", path);
                Self::load(Path::new(&path))?
            }
            None => Self::default(),
        };

        if let Some(mode) = lookup(MODE_VAR) {
            config.mode = mode.parse().with_context(|| format!("Invalid {}", MODE_VAR))?;
        }
        if let Some(parallel) = lookup(PARALLEL_VAR) {
            config.parallel = parse_flag(&parallel)
                .with_context(|| format!("Invalid {}", PARALLEL_VAR))?;
        }
        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse().with_context(|| format!("Invalid {}", FORMAT_VAR))?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("Expected a boolean, got '{}'", other),
    }
}

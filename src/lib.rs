//! Fishbone Scorer
//!
//! Builds "fishbone" structures from integer sequences and scores them.
//!
//! - `fishbone/`: the one-pass first-fit builder and its `Bone` records
//! - `metrics/`: quality, batch quality range, sword ranking + checksum
//! - `data`: strict parsing of single-sword and keyed batch input
//! - `scorer`: batch coordinator (sequential or Rayon)
//! - `config`: evaluation mode, parallelism and output format
//!
//! The library performs no I/O beyond what a caller hands it.

pub mod config;
pub mod data;
pub mod error;
pub mod fishbone;
pub mod metrics;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use config::{Mode, OutputFormat, ScorerConfig};
pub use data::{parse_single_line, Sword, SwordData};
pub use error::{FishboneError, Result};
pub use fishbone::{build, Bone, Fishbone};
pub use metrics::*;
pub use scorer::{score_input, ScoreReport, SwordScorer};

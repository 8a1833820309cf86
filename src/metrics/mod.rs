//! Fishbone evaluators
//!
//! - `quality`: spine of a single fishbone read as one integer
//! - `range`: best-minus-worst quality across a batch of swords
//! - `ranking`: three-level sword ordering and its weighted checksum

pub mod quality;
pub mod range;
pub mod ranking;

pub use quality::{quality, quality_of_values};
pub use range::{quality_range, RangeResult};
pub use ranking::{checksum, compare_swords, rank_swords, RankKey, RankedSword, Ranking};

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{FishboneError, Result};
use crate::fishbone::Fishbone;

/// A built fishbone tagged with its sword key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyedFishbone {
    pub key: i64,
    pub fishbone: Fishbone,
}

impl KeyedFishbone {
    pub fn new(key: i64, fishbone: Fishbone) -> Self {
        Self { key, fishbone }
    }
}

/// Reject batches where two swords share a key
pub(crate) fn ensure_unique_keys(entries: &[KeyedFishbone]) -> Result<()> {
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    for entry in entries {
        if !seen.insert(entry.key) {
            return Err(FishboneError::InvalidBatch(format!(
                "duplicate sword key {}",
                entry.key
            )));
        }
    }
    Ok(())
}

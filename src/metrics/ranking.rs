//! Sword ranking and checksum
//!
//! Swords are ordered by three levels, each consulted only on a tie in the
//! previous one:
//!   1. quality (higher wins)
//!   2. bone scores, position by position in fishbone order (higher wins),
//!      up to the shorter of the two fishbones being compared
//!   3. sword key (larger wins)
//!
//! Level 2 depends on the pair, so across uneven fishbone lengths the order
//! is not guaranteed to be transitive. Such batches are placed by binary
//! insertion, which gives a deterministic result for any comparator.

use malachite_bigint::BigInt;
use serde::Serialize;
use std::cmp::Ordering;

use super::{ensure_unique_keys, KeyedFishbone};
use crate::error::{FishboneError, Result};
use crate::utils::digits::serialize_decimal;

/// Precomputed comparison data of one sword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankKey {
    pub quality: BigInt,
    /// Every bone's score, in fishbone order
    pub bone_scores: Vec<BigInt>,
    pub key: i64,
}

impl RankKey {
    pub fn new(entry: &KeyedFishbone) -> Result<Self> {
        Ok(Self {
            quality: entry.fishbone.quality()?,
            bone_scores: entry.fishbone.bone_scores()?,
            key: entry.key,
        })
    }

    /// `Greater` means `self` ranks ahead of `other`
    pub fn compare(&self, other: &RankKey) -> Ordering {
        self.quality
            .cmp(&other.quality)
            .then_with(|| {
                self.bone_scores
                    .iter()
                    .zip(&other.bone_scores)
                    .map(|(a, b)| a.cmp(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// One sword's place in a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedSword {
    /// 1-based, 1 is the best sword
    pub rank: usize,
    pub key: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub quality: BigInt,
}

/// Full ranking, best first, with its checksum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub swords: Vec<RankedSword>,
    pub checksum: i128,
}

impl Ranking {
    /// Keys in rank order, best first
    pub fn keys(&self) -> Vec<i64> {
        self.swords.iter().map(|s| s.key).collect()
    }
}

/// Compare two swords; `Greater` means `a` ranks ahead of `b`
///
/// Bone scores are zipped and compared up to the shorter fishbone; extra
/// bones on the longer one are never looked at. Never returns `Equal` for
/// distinct keys.
pub fn compare_swords(a: &KeyedFishbone, b: &KeyedFishbone) -> Result<Ordering> {
    Ok(RankKey::new(a)?.compare(&RankKey::new(b)?))
}

/// Rank a batch of swords, best first, and compute the checksum
///
/// Every comparison is the pairwise one of `compare_swords`.
///
/// # Errors
/// `InvalidBatch` for an empty batch or duplicate keys; quality and score
/// errors of individual swords are propagated.
pub fn rank_swords(entries: &[KeyedFishbone]) -> Result<Ranking> {
    ensure_rankable(entries)?;
    let keys = entries
        .iter()
        .map(RankKey::new)
        .collect::<Result<Vec<RankKey>>>()?;
    Ok(ranking_from_keys(keys))
}

/// Non-empty batch with unique keys
pub(crate) fn ensure_rankable(entries: &[KeyedFishbone]) -> Result<()> {
    if entries.is_empty() {
        return Err(FishboneError::InvalidBatch(
            "cannot rank an empty batch".to_string(),
        ));
    }
    ensure_unique_keys(entries)
}

/// Order keys best first and assign ranks
pub(crate) fn ranking_from_keys(keys: Vec<RankKey>) -> Ranking {
    let shortest = keys.iter().map(|k| k.bone_scores.len()).min().unwrap_or(0);
    let longest = keys.iter().map(|k| k.bone_scores.len()).max().unwrap_or(0);

    let ordered = if shortest == longest {
        let mut keys = keys;
        keys.sort_unstable_by(|a, b| b.compare(a));
        keys
    } else {
        tracing::warn!(
            "Uneven fishbone lengths ({}..={} bones); bone scores compared pairwise up to the shorter",
            shortest,
            longest
        );
        insert_best_first(keys)
    };

    let swords: Vec<RankedSword> = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, k)| RankedSword {
            rank: idx + 1,
            key: k.key,
            quality: k.quality,
        })
        .collect();

    let ordered_keys: Vec<i64> = swords.iter().map(|s| s.key).collect();
    Ranking {
        checksum: checksum(&ordered_keys),
        swords,
    }
}

/// Binary insertion, best first; well defined even for a cyclic comparator
fn insert_best_first(keys: Vec<RankKey>) -> Vec<RankKey> {
    let mut ordered: Vec<RankKey> = Vec::with_capacity(keys.len());
    for key in keys {
        let pos = ordered.partition_point(|placed| placed.compare(&key).is_gt());
        ordered.insert(pos, key);
    }
    ordered
}

/// `Σ rank × key` over keys listed best first (rank starts at 1)
pub fn checksum(keys_best_first: &[i64]) -> i128 {
    keys_best_first
        .iter()
        .enumerate()
        .map(|(idx, &key)| (idx as i128 + 1) * key as i128)
        .sum()
}

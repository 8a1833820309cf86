//! Single-structure quality
//!
//! Quality is the fishbone's spine read as a number: every center, in
//! fishbone order, written side by side.

use malachite_bigint::BigInt;

use crate::error::Result;
use crate::fishbone::{build, Fishbone};

/// Quality of an already built fishbone
pub fn quality(fishbone: &Fishbone) -> Result<BigInt> {
    fishbone.quality()
}

/// Build a fishbone from `values` and return its quality
///
/// Empty input is a caller error and surfaces as `MalformedInput`.
pub fn quality_of_values(values: &[i64]) -> Result<BigInt> {
    let fishbone = build(values);
    tracing::debug!(
        "Built fishbone: {} values → {} bones",
        values.len(),
        fishbone.len()
    );
    quality(&fishbone)
}

//! Batch quality range (best minus worst)

use malachite_bigint::BigInt;
use serde::Serialize;

use super::{ensure_unique_keys, KeyedFishbone};
use crate::error::{FishboneError, Result};
use crate::utils::digits::serialize_decimal;

/// Extremes of a batch and the distance between them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeResult {
    /// Key of a sword with the highest quality
    pub best_key: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub best_quality: BigInt,
    /// Key of a sword with the lowest quality
    pub worst_key: i64,
    #[serde(serialize_with = "serialize_decimal")]
    pub worst_quality: BigInt,
    /// `best_quality - worst_quality`, never negative
    #[serde(serialize_with = "serialize_decimal")]
    pub range: BigInt,
}

/// Distance between the best and the worst quality in a batch
///
/// Ties between equal qualities are not resolved in any particular way;
/// only the extremes matter.
///
/// # Errors
/// `InvalidBatch` with fewer than two swords or duplicate keys; any
/// quality error of an individual sword is propagated as is.
pub fn quality_range(entries: &[KeyedFishbone]) -> Result<RangeResult> {
    ensure_rangeable(entries)?;

    let qualities = entries
        .iter()
        .map(|entry| Ok((entry.key, entry.fishbone.quality()?)))
        .collect::<Result<Vec<(i64, BigInt)>>>()?;

    range_of_qualities(&qualities)
}

/// At least two swords, no duplicate keys
pub(crate) fn ensure_rangeable(entries: &[KeyedFishbone]) -> Result<()> {
    if entries.len() < 2 {
        return Err(FishboneError::InvalidBatch(format!(
            "quality range needs at least two swords, got {}",
            entries.len()
        )));
    }
    ensure_unique_keys(entries)
}

/// Range over precomputed `(key, quality)` pairs
pub(crate) fn range_of_qualities(qualities: &[(i64, BigInt)]) -> Result<RangeResult> {
    let (worst_key, worst_quality) = qualities
        .iter()
        .min_by(|a, b| a.1.cmp(&b.1))
        .cloned()
        .ok_or_else(|| FishboneError::InvalidBatch("empty batch".to_string()))?;
    let (best_key, best_quality) = qualities
        .iter()
        .max_by(|a, b| a.1.cmp(&b.1))
        .cloned()
        .ok_or_else(|| FishboneError::InvalidBatch("empty batch".to_string()))?;

    let range = best_quality.clone() - worst_quality.clone();
    Ok(RangeResult {
        best_key,
        best_quality,
        worst_key,
        worst_quality,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishbone::build;

    fn sword(key: i64, values: &[i64]) -> KeyedFishbone {
        KeyedFishbone::new(key, build(values))
    }

    #[test]
    fn test_two_swords() {
        let entries = vec![sword(1, &[100]), sword(2, &[250])];
        let result = quality_range(&entries).unwrap();
        assert_eq!(result.range.to_string(), "150");
        assert_eq!(result.best_key, 2);
        assert_eq!(result.worst_key, 1);
    }

    #[test]
    fn test_ten_sword_batch() {
        let entries = vec![
            sword(1, &[2, 4, 1, 1, 8, 2, 7, 9, 8, 6]),
            sword(2, &[7, 9, 9, 3, 8, 3, 8, 8, 6, 8]),
            sword(3, &[4, 7, 6, 9, 1, 8, 3, 7, 2, 2]),
            sword(4, &[6, 4, 2, 1, 7, 4, 5, 5, 5, 8]),
            sword(5, &[2, 2, 5, 2, 3, 1, 5, 9, 4, 2]),
            sword(6, &[5, 4, 3, 8, 2, 9, 7, 8, 1, 8]),
            sword(7, &[2, 8, 7, 5, 6, 5, 4, 3, 1, 1]),
            sword(8, &[5, 8, 2, 6, 7, 8, 5, 2, 4, 1]),
            sword(9, &[3, 2, 5, 4, 1, 7, 4, 1, 5, 3]),
            sword(10, &[8, 3, 2, 7, 1, 3, 6, 8, 5, 3]),
        ];
        let result = quality_range(&entries).unwrap();
        assert_eq!(result.best_key, 10);
        assert_eq!(result.best_quality.to_string(), "82383");
        assert_eq!(result.worst_key, 9);
        assert_eq!(result.worst_quality.to_string(), "3443");
        assert_eq!(result.range.to_string(), "78940");
    }

    #[test]
    fn test_all_equal_is_zero() {
        let entries = vec![sword(1, &[3, 1, 5]), sword(2, &[3, 2, 4])];
        assert_eq!(quality_range(&entries).unwrap().range.to_string(), "0");
    }

    #[test]
    fn test_range_past_u128() {
        // 41 ones against a single 1
        let entries = vec![sword(1, &[1; 41]), sword(2, &[1])];
        let result = quality_range(&entries).unwrap();
        assert_eq!(result.best_key, 1);
        assert_eq!(result.range.to_string(), format!("{}0", "1".repeat(40)));
    }

    #[test]
    fn test_negative_quality_widens_range() {
        // -3 then 5 on its right: quality -3
        let entries = vec![sword(1, &[-3, 5]), sword(2, &[4])];
        let result = quality_range(&entries).unwrap();
        assert_eq!(result.worst_key, 1);
        assert_eq!(result.range.to_string(), "7");
    }

    #[test]
    fn test_json_writes_decimal_strings() {
        let entries = vec![sword(1, &[100]), sword(2, &[250])];
        let json = serde_json::to_value(quality_range(&entries).unwrap()).unwrap();
        assert_eq!(json["range"], "150");
        assert_eq!(json["best_key"], 2);
    }

    #[test]
    fn test_needs_two_swords() {
        let entries = vec![sword(1, &[3])];
        assert!(matches!(
            quality_range(&entries),
            Err(FishboneError::InvalidBatch(_))
        ));
        assert!(matches!(
            quality_range(&[]),
            Err(FishboneError::InvalidBatch(_))
        ));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let entries = vec![sword(1, &[3]), sword(1, &[4])];
        assert!(matches!(
            quality_range(&entries),
            Err(FishboneError::InvalidBatch(_))
        ));
    }

    #[test]
    fn test_empty_sword_propagates() {
        let entries = vec![sword(1, &[3]), sword(2, &[])];
        assert!(matches!(
            quality_range(&entries),
            Err(FishboneError::MalformedInput(_))
        ));
    }
}

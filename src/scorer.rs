//! Sword Scorer - coordinator for batch evaluation
//!
//! Builds every sword's fishbone and runs the evaluators over the batch.
//! Building is independent per sword, so a batch can be built sequentially
//! or on the rayon pool; ranking itself is always a single sort.

use malachite_bigint::BigInt;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{Mode, ScorerConfig};
use crate::data::{parse_single_line, SwordData};
use crate::error::Result;
use crate::fishbone::{build, Fishbone};
use crate::metrics::range::{ensure_rangeable, range_of_qualities};
use crate::metrics::ranking::{ensure_rankable, ranking_from_keys};
use crate::metrics::{KeyedFishbone, RangeResult, RankKey, Ranking};
use crate::utils::digits::serialize_decimal;

/// Built batch of swords, in input order
pub struct SwordScorer {
    swords: Vec<KeyedFishbone>,
    parallel: bool,
}

/// Result of one scorer run, tagged by mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ScoreReport {
    Quality {
        #[serde(serialize_with = "serialize_decimal")]
        quality: BigInt,
        fishbone: Fishbone,
    },
    Range(RangeResult),
    Checksum(Ranking),
}

impl ScoreReport {
    /// The single number the report stands for
    pub fn headline(&self) -> String {
        match self {
            ScoreReport::Quality { quality, .. } => quality.to_string(),
            ScoreReport::Range(range) => range.range.to_string(),
            ScoreReport::Checksum(ranking) => ranking.checksum.to_string(),
        }
    }
}

impl SwordScorer {
    /// Build fishbones for every sword in `data`
    pub fn new(data: &SwordData, parallel: bool) -> Self {
        let swords: Vec<KeyedFishbone> = if parallel {
            data.swords
                .par_iter()
                .map(|s| KeyedFishbone::new(s.key, build(&s.values)))
                .collect()
        } else {
            data.swords
                .iter()
                .map(|s| KeyedFishbone::new(s.key, build(&s.values)))
                .collect()
        };

        tracing::info!(
            "Built {} fishbones ({})",
            swords.len(),
            if parallel { "parallel" } else { "sequential" }
        );

        Self { swords, parallel }
    }

    pub fn swords(&self) -> &[KeyedFishbone] {
        &self.swords
    }

    /// Best minus worst quality over the batch
    pub fn quality_range(&self) -> Result<RangeResult> {
        ensure_rangeable(&self.swords)?;

        let qualities = self.collect(|entry| Ok((entry.key, entry.fishbone.quality()?)))?;
        let result = range_of_qualities(&qualities)?;

        tracing::info!(
            "Quality range {} (best sword {}, worst sword {})",
            result.range,
            result.best_key,
            result.worst_key
        );
        Ok(result)
    }

    /// Full ranking, best first, with checksum
    ///
    /// Per-sword qualities and bone scores are computed up front (on the
    /// rayon pool when configured); the ordering itself is sequential.
    pub fn rank(&self) -> Result<Ranking> {
        ensure_rankable(&self.swords)?;
        let keys = self.collect(RankKey::new)?;
        let ranking = ranking_from_keys(keys);

        tracing::info!(
            "Ranked {} swords, checksum {}",
            ranking.swords.len(),
            ranking.checksum
        );
        Ok(ranking)
    }

    /// Map every sword, on the rayon pool when configured
    fn collect<T, F>(&self, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&KeyedFishbone) -> Result<T> + Sync + Send,
    {
        if self.parallel {
            self.swords.par_iter().map(f).collect()
        } else {
            self.swords.iter().map(f).collect()
        }
    }
}

/// Run the configured evaluation over raw input text
pub fn score_input(text: &str, config: &ScorerConfig) -> Result<ScoreReport> {
    match config.mode {
        Mode::Quality => {
            let values = parse_single_line(text)?;
            let fishbone = build(&values);
            tracing::debug!("Fishbone:\n{}", fishbone);
            let quality = fishbone.quality()?;
            Ok(ScoreReport::Quality { quality, fishbone })
        }
        Mode::Range => {
            let data = SwordData::parse(text)?;
            let scorer = SwordScorer::new(&data, config.parallel);
            Ok(ScoreReport::Range(scorer.quality_range()?))
        }
        Mode::Checksum => {
            let data = SwordData::parse(text)?;
            let scorer = SwordScorer::new(&data, config.parallel);
            Ok(ScoreReport::Checksum(scorer.rank()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::FishboneError;
    use crate::metrics::{quality_range, rank_swords};

    const BATCH: &str = "1:2,4,1,1,8,2,7,9,8,6
2:7,9,9,3,8,3,8,8,6,8
3:4,7,6,9,1,8,3,7,2,2
4:6,4,2,1,7,4,5,5,5,8
5:2,2,5,2,3,1,5,9,4,2
6:5,4,3,8,2,9,7,8,1,8
7:2,8,7,5,6,5,4,3,1,1
8:5,8,2,6,7,8,5,2,4,1
9:3,2,5,4,1,7,4,1,5,3
10:8,3,2,7,1,3,6,8,5,3
";

    fn config(mode: Mode, parallel: bool) -> ScorerConfig {
        ScorerConfig {
            mode,
            parallel,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_quality_mode() {
        let report = score_input("58:5,3,7,8,9,10,4,5,7,8,8", &config(Mode::Quality, false)).unwrap();
        assert_eq!(report.headline(), "581078");
    }

    #[test]
    fn test_range_mode() {
        let report = score_input(BATCH, &config(Mode::Range, false)).unwrap();
        assert_eq!(report.headline(), "78940");
    }

    #[test]
    fn test_checksum_mode() {
        let report = score_input(BATCH, &config(Mode::Checksum, false)).unwrap();
        assert_eq!(report.headline(), "318");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for mode in [Mode::Range, Mode::Checksum] {
            let seq = score_input(BATCH, &config(mode, false)).unwrap();
            let par = score_input(BATCH, &config(mode, true)).unwrap();
            assert_eq!(seq, par);
        }
    }

    #[test]
    fn test_swords_keep_input_order() {
        let data = SwordData::parse(BATCH).unwrap();
        let scorer = SwordScorer::new(&data, true);
        let keys: Vec<i64> = scorer.swords().iter().map(|s| s.key).collect();
        assert_eq!(keys, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_range_needs_two_swords() {
        let err = score_input("1:3,1,5", &config(Mode::Range, true)).unwrap_err();
        assert!(matches!(err, FishboneError::InvalidBatch(_)));
    }

    #[test]
    fn test_range_paths_reject_the_same_batches() {
        let sword = |key: i64, values: Vec<i64>| crate::data::Sword { key, values };
        let batches = [
            vec![sword(1, vec![3, 1, 5])],
            vec![sword(1, vec![3]), sword(1, vec![4])],
        ];
        for swords in batches {
            let scorer = SwordScorer::new(&SwordData { swords }, false);
            assert_eq!(
                scorer.quality_range().unwrap_err(),
                quality_range(scorer.swords()).unwrap_err()
            );
        }
    }

    #[test]
    fn test_uneven_batch_checksum() {
        let text = "1:5,3,7,4,2,6\n2:5,3,7,4,1,6\n3:9\n";
        for parallel in [false, true] {
            let report = score_input(text, &config(Mode::Checksum, parallel)).unwrap();
            assert_eq!(report.headline(), "14");
        }

        let data = SwordData::parse(text).unwrap();
        let scorer = SwordScorer::new(&data, true);
        assert_eq!(scorer.rank().unwrap(), rank_swords(scorer.swords()).unwrap());
    }

    #[test]
    fn test_long_spine_quality_mode() {
        let text = format!("7:{}", vec!["1"; 45].join(","));
        let report = score_input(&text, &config(Mode::Quality, false)).unwrap();
        assert_eq!(report.headline(), "1".repeat(45));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["quality"], "1".repeat(45));
    }

    #[test]
    fn test_negative_leading_center() {
        let report = score_input("x:-3,5,1", &config(Mode::Quality, false)).unwrap();
        assert_eq!(report.headline(), "-31");
    }

    #[test]
    fn test_malformed_input_yields_no_report() {
        let err = score_input("abc:1,2,3", &config(Mode::Checksum, false)).unwrap_err();
        assert!(matches!(err, FishboneError::MalformedInput(_)));

        let err = score_input("1,2,3", &config(Mode::Quality, false)).unwrap_err();
        assert!(matches!(err, FishboneError::MalformedInput(_)));
    }

    #[test]
    fn test_report_json() {
        let report = score_input("x:3,1,5", &config(Mode::Quality, false)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "quality");
        assert_eq!(json["fishbone"]["bones"][0]["left"], 1);
        assert_eq!(json["fishbone"]["bones"][0]["right"], 5);
    }
}

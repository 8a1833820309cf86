//! Sword input parsing
//!
//! Two input shapes are accepted:
//! - a single line `<anything>:<v1>,<v2>,...` (only the first line counts)
//! - one `<key>:<v1>,<v2>,...` line per sword
//!
//! Parsing is strict: a token that is not an integer is an error, never
//! skipped or read as zero.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::str::FromStr;

use crate::error::{FishboneError, Result};

/// Raw input of one sword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sword {
    pub key: i64,
    pub values: Vec<i64>,
}

/// All swords of a batch, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwordData {
    pub swords: Vec<Sword>,
}

impl SwordData {
    /// Parse keyed lines; blank lines are skipped
    ///
    /// # Errors
    /// `MalformedInput` for any bad line or an input with no swords,
    /// `InvalidBatch` when a key repeats.
    pub fn parse(text: &str) -> Result<Self> {
        let mut swords = Vec::new();
        let mut seen: FxHashSet<i64> = FxHashSet::default();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let sword = parse_keyed_line(line, idx + 1)?;
            if !seen.insert(sword.key) {
                return Err(FishboneError::InvalidBatch(format!(
                    "duplicate sword key {} on line {}",
                    sword.key,
                    idx + 1
                )));
            }
            swords.push(sword);
        }

        if swords.is_empty() {
            return Err(FishboneError::MalformedInput(
                "no swords in input".to_string(),
            ));
        }

        tracing::debug!("Parsed {} swords", swords.len());
        Ok(Self { swords })
    }

    /// Read everything from `reader` and parse it as keyed lines
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| FishboneError::MalformedInput(format!("unreadable input: {}", e)))?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.swords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swords.is_empty()
    }
}

impl FromStr for SwordData {
    type Err = FishboneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Values of a single-sword input
///
/// Only the first line is read and its prefix before the first `:` is
/// ignored.
pub fn parse_single_line(text: &str) -> Result<Vec<i64>> {
    let line = text
        .lines()
        .next()
        .ok_or_else(|| FishboneError::MalformedInput("empty input".to_string()))?;
    let (_, values) = line
        .split_once(':')
        .ok_or_else(|| FishboneError::malformed_line(1, "missing ':' separator"))?;
    parse_values(values, 1)
}

/// `<key>:<values>` → `Sword`
pub fn parse_keyed_line(line: &str, line_no: usize) -> Result<Sword> {
    let (key, values) = line
        .split_once(':')
        .ok_or_else(|| FishboneError::malformed_line(line_no, "missing ':' separator"))?;
    let key = parse_int(key, line_no, "key")?;
    let values = parse_values(values, line_no)?;
    Ok(Sword { key, values })
}

/// Comma-separated integers; at least one is required
fn parse_values(text: &str, line_no: usize) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Err(FishboneError::malformed_line(line_no, "no values after ':'"));
    }
    text.split(',')
        .map(|token| parse_int(token, line_no, "value"))
        .collect()
}

fn parse_int(token: &str, line_no: usize, what: &str) -> Result<i64> {
    let token = token.trim();
    token.parse::<i64>().map_err(|_| {
        FishboneError::malformed_line(line_no, format!("{} '{}' is not an integer", what, token))
    })
}

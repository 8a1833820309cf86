//! Fishbone construction
//!
//! One pass over the input, first-fit in bone creation order. This is not
//! a search tree: bones are scanned in the order they were created, never
//! by value, and the first bone with a matching free side takes the value.

use malachite_bigint::BigInt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::Bone;
use crate::error::{FishboneError, Result};
use crate::utils::concat_digits;

/// Ordered bones of one sword, in creation order
///
/// Inline capacity covers typical puzzle swords without heap allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fishbone {
    bones: SmallVec<[Bone; 8]>,
}

impl Fishbone {
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Total values held across all bones
    pub fn slots_used(&self) -> usize {
        self.bones.iter().map(Bone::slots_used).sum()
    }

    /// Concatenated centers in fishbone order, read as one integer
    ///
    /// # Errors
    /// `MalformedInput` for an empty fishbone, `InvalidDigits` if a center
    /// after the first is negative.
    pub fn quality(&self) -> Result<BigInt> {
        if self.bones.is_empty() {
            return Err(FishboneError::MalformedInput(
                "quality of an empty fishbone".to_string(),
            ));
        }
        concat_digits(self.bones.iter().map(Bone::center))
    }

    /// Per-bone scores in fishbone order
    pub fn bone_scores(&self) -> Result<Vec<BigInt>> {
        self.bones.iter().map(Bone::score).collect()
    }

    fn attach(&mut self, value: i64) {
        if self.bones.iter_mut().any(|bone| bone.try_attach(value)) {
            return;
        }
        self.bones.push(Bone::new(value));
    }
}

impl fmt::Display for Fishbone {
    /// One bone per line, top to bottom
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, bone) in self.bones.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", bone)?;
        }
        Ok(())
    }
}

/// Build a fishbone from `values`, processed strictly in order
///
/// For each value, the first existing bone that can take it on a free
/// side (smaller-than tried before greater-than) gets it; otherwise the
/// value becomes the center of a new bone appended at the end.
pub fn build(values: &[i64]) -> Fishbone {
    let mut fishbone = Fishbone::default();
    for &value in values {
        fishbone.attach(value);
    }
    fishbone
}

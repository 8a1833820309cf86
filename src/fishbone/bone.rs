//! A single bone: fixed center with at most one value on each side.

use malachite_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::utils::concat_digits;

/// One node of a fishbone
///
/// `left < center < right` whenever the side is filled. Each side is set at
/// most once, by the first value routed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bone {
    center: i64,
    left: Option<i64>,
    right: Option<i64>,
}

impl Bone {
    /// New bone with both sides free
    pub fn new(center: i64) -> Self {
        Self {
            center,
            left: None,
            right: None,
        }
    }

    pub fn center(&self) -> i64 {
        self.center
    }

    pub fn left(&self) -> Option<i64> {
        self.left
    }

    pub fn right(&self) -> Option<i64> {
        self.right
    }

    /// Try to place `value` on this bone
    ///
    /// Smaller-than is tried before greater-than. Returns `true` if the bone
    /// took the value; a value equal to the center is never taken.
    pub fn try_attach(&mut self, value: i64) -> bool {
        if value < self.center && self.left.is_none() {
            self.left = Some(value);
            true
        } else if value > self.center && self.right.is_none() {
            self.right = Some(value);
            true
        } else {
            false
        }
    }

    /// Number of values this bone holds (center included)
    pub fn slots_used(&self) -> usize {
        1 + usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Integer formed by `left`, `center`, `right` written side by side,
    /// missing sides omitted. Used to break quality ties.
    pub fn score(&self) -> Result<BigInt> {
        concat_digits(self.left.into_iter().chain([self.center]).chain(self.right))
    }
}

impl fmt::Display for Bone {
    /// `left-center-right`, with an empty string for a free side
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(left) = self.left {
            write!(f, "{}", left)?;
        }
        write!(f, "-{}-", self.center)?;
        if let Some(right) = self.right {
            write!(f, "{}", right)?;
        }
        Ok(())
    }
}

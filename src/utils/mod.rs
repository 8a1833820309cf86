//! Utility modules shared by the evaluators
//!
//! - Digits: decimal concatenation for quality and bone scores

pub mod digits;

pub use digits::concat_digits;

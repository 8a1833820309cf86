//! Error type shared by the builder, the evaluators and input parsing.

use thiserror::Error;

/// Errors raised while parsing sword input or evaluating fishbones
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FishboneError {
    /// Non-integer token, missing delimiter, empty value list or wrong line shape
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Duplicate keys, or too few swords for the requested evaluation
    #[error("invalid batch: {0}")]
    InvalidBatch(String),

    /// Concatenated text that does not read as a decimal integer
    #[error("not a decimal integer: {digits}")]
    InvalidDigits { digits: String },
}

impl FishboneError {
    /// Malformed input pinned to a 1-based input line
    pub(crate) fn malformed_line(line: usize, reason: impl std::fmt::Display) -> Self {
        FishboneError::MalformedInput(format!("line {}: {}", line, reason))
    }
}

pub type Result<T> = std::result::Result<T, FishboneError>;

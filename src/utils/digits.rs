//! Decimal digit concatenation
//!
//! Quality and bone scores are both "write the numbers next to each other
//! and read the result as one integer". The result is unbounded, so long
//! spines never overflow.

use malachite_bigint::BigInt;
use serde::Serializer;
use std::fmt::Write;

use crate::error::{FishboneError, Result};

/// Concatenate the decimal forms of `parts` into one integer
///
/// A part of `0` contributes a literal `0` digit, so leading zeros of the
/// whole number simply vanish (`[0, 5]` → `5`), matching integer parsing
/// of the concatenated text.
///
/// Negative parts are written with their sign. Only a negative first part
/// still reads as an integer (`[-3, 5]` → `-35`, a negative quality); a
/// sign anywhere later (`[5, -3]` → `5-3`) is rejected.
///
/// # Errors
/// `InvalidDigits` if the concatenated text is empty or not a decimal
/// integer.
pub fn concat_digits<I>(parts: I) -> Result<BigInt>
where
    I: IntoIterator<Item = i64>,
{
    let mut digits = String::new();
    for part in parts {
        // Writing into a String cannot fail
        let _ = write!(digits, "{}", part);
    }

    digits
        .parse::<BigInt>()
        .map_err(|_| FishboneError::InvalidDigits { digits })
}

/// Serialize a big integer as its decimal string
pub(crate) fn serialize_decimal<S>(
    value: &BigInt,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

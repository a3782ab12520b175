//! Column letter codec
//!
//! Columns are numbered 1-based (A = 1, Z = 26, AA = 27, ..., ZZZ = 18278) and
//! written in bijective base-26: there is no zero digit, so every index in the
//! domain has exactly one letter encoding.

use crate::error::{Axis, Error, Result};
use crate::{MAX_COLUMN, MAX_COLUMN_LETTERS};

/// Convert a column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use cellref_core::column;
///
/// assert_eq!(column::encode(1).unwrap(), "A");
/// assert_eq!(column::encode(27).unwrap(), "AA");
/// assert!(column::encode(0).is_err());
/// ```
pub fn encode(index: u32) -> Result<String> {
    if !(1..=MAX_COLUMN).contains(&index) {
        return Err(Error::domain(
            index.to_string(),
            Axis::Column,
            u64::from(index),
            u64::from(MAX_COLUMN),
        ));
    }
    Ok(encode_in_domain(index))
}

/// Encode an index already known to be inside the column domain
pub(crate) fn encode_in_domain(index: u32) -> String {
    let mut buf = [0u8; MAX_COLUMN_LETTERS];
    let mut pos = MAX_COLUMN_LETTERS;
    let mut n = index;

    while n > 0 {
        n -= 1;
        pos -= 1;
        buf[pos] = b'A' + (n % 26) as u8;
        n /= 26;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Convert column letters to an index (A = 1, Z = 26, AA = 27, etc.)
///
/// Only 1 to 3 uppercase ASCII letters are accepted.
pub fn decode(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::validation(letters, "empty column letters"));
    }
    if letters.len() > MAX_COLUMN_LETTERS {
        return Err(Error::validation(letters, "too many column letters"));
    }
    if !letters.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(Error::validation(
            letters,
            "column letters must be uppercase A-Z",
        ));
    }

    let index = letters
        .bytes()
        .fold(0u32, |acc, b| acc * 26 + u32::from(b - b'A' + 1));

    // Three letters top out at ZZZ, so any valid spelling lands in the domain.
    debug_assert!((1..=MAX_COLUMN).contains(&index));
    Ok(index)
}

/// Check whether `letters` is a valid column spelling
pub fn is_column_letters(letters: &str) -> bool {
    decode(letters).is_ok()
}

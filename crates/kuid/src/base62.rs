//! Fixed-width base-62 codec for unsigned 64-bit integers.
//!
//! One `u64` always encodes to exactly [`ENCODED_LEN`] characters. Since
//! 62^11 > 2^64, eleven digits cover the full range, and small values are
//! padded with leading `'0'` (the alphabet's zero symbol) so the width never
//! varies. Fixed width is what lets two encoded halves be concatenated and
//! split back apart without a separator.

use crate::{KuidError, KuidResult};

/// The 62-symbol alphabet. The index of a byte in this table is its digit
/// value, so ordering matters.
pub(crate) const ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Width of a single encoded `u64`.
pub(crate) const ENCODED_LEN: usize = 11;

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes `value` as exactly [`ENCODED_LEN`] base-62 characters, most
/// significant digit first.
pub(crate) fn encode(mut value: u64) -> String {
    let mut out = [0u8; ENCODED_LEN];
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }
    // The alphabet is ASCII, so the buffer is valid UTF-8.
    String::from_utf8(out.to_vec()).expect("base-62 output is ASCII")
}

/// Decodes an [`ENCODED_LEN`]-character digit string back to a `u64`.
///
/// Takes bytes rather than `&str` so the compact-string parser can split its
/// input into halves without caring about UTF-8 char boundaries; any
/// multi-byte character is rejected on its first byte anyway.
///
/// # Errors
///
/// Returns [`KuidError::InvalidLength`] unless `digits` is exactly 11 bytes,
/// or [`KuidError::InvalidChar`] on the first byte outside the alphabet.
pub(crate) fn decode(digits: &[u8]) -> KuidResult<u64> {
    if digits.len() != ENCODED_LEN {
        return Err(KuidError::InvalidLength {
            expected: ENCODED_LEN,
            actual: digits.len(),
        });
    }

    let mut value: u64 = 0;
    for &byte in digits {
        let digit = digit_value(byte).ok_or(KuidError::InvalidChar(byte as char))?;
        // 62^11 exceeds 2^64, so an alphabet-valid string above u64::MAX must
        // wrap rather than abort: decode is total over valid digit strings.
        value = value.wrapping_mul(BASE).wrapping_add(digit);
    }
    Ok(value)
}

fn digit_value(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some(u64::from(byte - b'0')),
        b'A'..=b'Z' => Some(u64::from(byte - b'A') + 10),
        b'a'..=b'z' => Some(u64::from(byte - b'a') + 36),
        _ => None,
    }
}

//! The 128-bit identifier type and its format conversions.
//!
//! Every conversion funnels through the canonical in-memory form, a
//! `(high, low)` pair of `u64` halves. Bytes, UUID text, and compact text
//! are each pure functions to and from that pair.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::base62::{self, ENCODED_LEN};
use crate::{KuidError, KuidResult};

/// Width of the compact text form: two encoded halves, no separator.
const COMPACT_LEN: usize = 2 * ENCODED_LEN;

/// Width of the hyphenated UUID text form.
const UUID_LEN: usize = 36;

/// Width of the binary form.
const BYTE_LEN: usize = 16;

/// Hyphen offsets in hyphenated UUID text (groups of 8-4-4-4-12).
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A compressed universally unique identifier.
///
/// A `Kuid` is an opaque 128-bit value. It is immutable once constructed:
/// every conversion produces a new string, byte array, or `Kuid` rather than
/// mutating in place, so instances are freely shareable across threads.
///
/// # Construction
/// - [`Kuid::generate`] draws 16 bytes from the operating system's secure
///   entropy source.
/// - [`Kuid::from_bytes`] interprets exactly 16 big-endian bytes.
/// - [`Kuid::from_uuid`] parses the 36-character hyphenated UUID text form.
/// - [`Kuid::parse`] parses the 22-character compact text form (also
///   available through [`FromStr`]).
///
/// # Display format
/// When displayed or converted to a string, a `Kuid` always produces its
/// 22-character compact form. Use [`Kuid::to_uuid`] for the hyphenated form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Kuid {
    /// Most-significant 64 bits.
    high: u64,
    /// Least-significant 64 bits.
    low: u64,
}

impl Kuid {
    /// Generates a new random identifier.
    ///
    /// Draws 16 bytes from the operating system's cryptographically secure
    /// entropy source. All 128 bits are random; no RFC 4122 version or
    /// variant bits are set.
    ///
    /// # Errors
    ///
    /// Returns [`KuidError::Generation`] if the entropy source fails. No
    /// retry is attempted; callers that want one apply their own policy.
    pub fn generate() -> KuidResult<Self> {
        let mut buf = [0u8; BYTE_LEN];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(Self::from(buf))
    }

    /// Interprets a byte slice as an identifier.
    ///
    /// The first eight bytes become the most-significant half and the last
    /// eight the least-significant half, big-endian regardless of host byte
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`KuidError::InvalidLength`] unless `bytes` is exactly 16
    /// bytes long. Input is never truncated or padded.
    pub fn from_bytes(bytes: &[u8]) -> KuidResult<Self> {
        let raw: [u8; BYTE_LEN] =
            bytes
                .try_into()
                .map_err(|_| KuidError::InvalidLength {
                    expected: BYTE_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self::from(raw))
    }

    /// Returns the identifier as 16 big-endian bytes.
    pub fn bytes(&self) -> [u8; BYTE_LEN] {
        let mut out = [0u8; BYTE_LEN];
        out[..8].copy_from_slice(&self.high.to_be_bytes());
        out[8..].copy_from_slice(&self.low.to_be_bytes());
        out
    }

    /// Parses the 36-character hyphenated UUID text form.
    ///
    /// Hex digits are accepted in either case; hyphens must sit exactly at
    /// positions 8, 13, 18, and 23.
    ///
    /// # Errors
    ///
    /// Returns [`KuidError::InvalidUuid`] if the length is wrong, a hyphen
    /// is out of place, or the 32-character body is not valid hex.
    pub fn from_uuid(text: &str) -> KuidResult<Self> {
        if text.len() != UUID_LEN {
            return Err(KuidError::InvalidUuid(format!(
                "expected {UUID_LEN} characters, got {}",
                text.len()
            )));
        }

        let raw = text.as_bytes();
        for pos in HYPHEN_POSITIONS {
            if raw[pos] != b'-' {
                return Err(KuidError::InvalidUuid(format!(
                    "expected '-' at position {pos}"
                )));
            }
        }

        let body: String = text.chars().filter(|&c| c != '-').collect();
        if body.len() != 32 {
            // A hyphen somewhere other than the four checked positions.
            return Err(KuidError::InvalidUuid(
                "hyphens allowed only at positions 8, 13, 18 and 23".into(),
            ));
        }

        let bytes = hex::decode(&body)
            .map_err(|err| KuidError::InvalidUuid(err.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Renders the identifier in hyphenated UUID text form.
    ///
    /// Output is always lowercase, regardless of the case of any input the
    /// identifier was parsed from.
    pub fn to_uuid(&self) -> String {
        let hex = hex::encode(self.bytes());
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }

    /// Parses the 22-character compact text form.
    ///
    /// The first 11 characters decode to the most-significant half and the
    /// last 11 to the least-significant half; the halves are not
    /// interchangeable.
    ///
    /// # Errors
    ///
    /// Returns [`KuidError::InvalidLength`] unless `text` is exactly 22
    /// characters, or [`KuidError::InvalidChar`] on a character outside the
    /// base-62 alphabet.
    pub fn parse(text: &str) -> KuidResult<Self> {
        let raw = text.as_bytes();
        if raw.len() != COMPACT_LEN {
            return Err(KuidError::InvalidLength {
                expected: COMPACT_LEN,
                actual: raw.len(),
            });
        }

        let high = base62::decode(&raw[..ENCODED_LEN])?;
        let low = base62::decode(&raw[ENCODED_LEN..])?;
        Ok(Self { high, low })
    }
}

impl From<[u8; BYTE_LEN]> for Kuid {
    fn from(bytes: [u8; BYTE_LEN]) -> Self {
        let high = u64::from_be_bytes(bytes[..8].try_into().expect("8-byte half"));
        let low = u64::from_be_bytes(bytes[8..].try_into().expect("8-byte half"));
        Self { high, low }
    }
}

impl TryFrom<&[u8]> for Kuid {
    type Error = KuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Kuid {
    /// Formats the identifier in its 22-character compact form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base62::encode(self.high))?;
        f.write_str(&base62::encode(self.low))
    }
}

impl FromStr for Kuid {
    type Err = KuidError;

    /// Parses compact text into a `Kuid`.
    ///
    /// This is equivalent to calling [`Kuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Kuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Kuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

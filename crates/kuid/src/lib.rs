//! Compact base-62 text encoding for 128-bit unique identifiers.
//!
//! A [`Kuid`] is an opaque 128-bit value held as two unsigned 64-bit halves
//! (most-significant first). It moves between three external representations,
//! all of which are strict, fixed-width, and bit-exact round-trips of each
//! other:
//!
//! - **Compact text**: 22 base-62 characters (11 per half), URL-safe and
//!   case-sensitive. Example: `0aB9XyZ01cDf0aB9XyZ01c`.
//! - **UUID text**: the familiar 36-character hyphenated form, lowercase hex
//!   on output, case-insensitive hex accepted on input.
//!   Example: `123e4567-e89b-12d3-a456-426614174000`.
//! - **Binary**: exactly 16 bytes, big-endian, bytes `[0..8]` holding the
//!   most-significant half.
//!
//! ## Compact form
//! - Length: 22
//! - Alphabet: `0-9`, `A-Z`, `a-z`, in that order; the index of a character
//!   in the alphabet is its digit value
//! - Leading zero digits are preserved, so the width never varies
//!
//! Notes:
//! - The 128 bits are treated as opaque. No RFC 4122 version or variant
//!   semantics are interpreted or enforced, and no ordering is defined.
//! - Every constructor validates fully before producing a value; malformed
//!   input of any representation is rejected, never truncated or padded.
//!
//! ```
//! use kuid::Kuid;
//!
//! let id = Kuid::from_uuid("123e4567-e89b-12d3-a456-426614174000")?;
//! let compact = id.to_string();
//! assert_eq!(compact.len(), 22);
//! assert_eq!(Kuid::parse(&compact)?, id);
//! # Ok::<(), kuid::KuidError>(())
//! ```

mod base62;
mod id;

pub use id::Kuid;

/// Error type for KUID operations.
#[derive(Debug, thiserror::Error)]
pub enum KuidError {
    /// Input length does not match the exact width required by its
    /// representation (22 or 11 characters, or 16 bytes).
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside the base-62 alphabet appeared in compact text.
    #[error("invalid character '{0}' in KUID string")]
    InvalidChar(char),

    /// Malformed hyphenated UUID text.
    #[error("invalid UUID format: {0}")]
    InvalidUuid(String),

    /// The entropy source failed to supply random bytes.
    #[error("failed to generate random identifier: {0}")]
    Generation(#[from] rand::Error),
}

/// Result type for KUID operations.
pub type KuidResult<T> = Result<T, KuidError>;

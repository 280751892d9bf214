//! The fixed 95-symbol printable-ASCII alphabet, codes 32 through 126.
//!
//! Every row of a pad is a permutation of exactly these codes, and every
//! byte the cipher consumes or produces lies in this range.

/// The lowest code in the alphabet (space).
pub const ALPHABET_START: u8 = 32;

/// The highest code in the alphabet (`~`).
pub const ALPHABET_END: u8 = 126;

/// The number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 95;

/// The byte substituted for characters the alphabet cannot represent.
pub const REPLACEMENT: u8 = b'_';

/// Returns the alphabet codes in their canonical order.
#[must_use]
pub const fn codes() -> std::ops::RangeInclusive<u8> {
    ALPHABET_START..=ALPHABET_END
}

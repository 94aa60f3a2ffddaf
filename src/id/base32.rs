//! # Base32 Encoding
//!
//! Crockford's Base32 alphabet for short, unambiguous identifiers that are easy
//! to read aloud at a campus help desk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Crockford's Base32 alphabet (no I, L, O, U)
pub const ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J',
    'K', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the alphabet character for the low five bits of `value`.
#[allow(clippy::cast_possible_truncation)] // masked to 0..32
pub const fn digit(value: u64) -> char {
    ALPHABET[(value & 0x1F) as usize]
}

/// Encodes `value` as exactly `width` characters, most significant first.
///
/// Bits above `5 * width` are dropped.
pub fn encode_fixed(value: u64, width: usize) -> String {
    (0..width)
        .rev()
        .map(|position| {
            let shift = u32::try_from(position * 5).unwrap_or(u32::MAX);
            digit(value.checked_shr(shift).unwrap_or(0))
        })
        .collect()
}

//! Symbol encoding.
//!
//! The alphabet is the 26 lowercase ASCII letters followed by the 10 ASCII
//! digits. Letters occupy columns `0..26` and digits columns `26..36`, so
//! `'a'` encodes to 0 and `'0'` to 26.

use crate::error::CoreError;

/// Number of columns in every transition table.
pub const ALPHABET_SIZE: usize = 36;

/// Ordinals below this are treated as digits, the rest as letters.
const DIGIT_CUTOFF: u32 = 60;
const DIGIT_OFFSET: u32 = 22;
const LETTER_OFFSET: u32 = 97;

const LETTERS: usize = 26;

/// Maps a symbol to its column in the transition table.
pub fn encode(symbol: char) -> Result<usize, CoreError> {
    let ordinal = symbol as u32;
    let (index, valid) = if ordinal < DIGIT_CUTOFF {
        let index = ordinal.wrapping_sub(DIGIT_OFFSET) as usize;
        (index, symbol.is_ascii_digit())
    } else {
        let index = ordinal.wrapping_sub(LETTER_OFFSET) as usize;
        (index, symbol.is_ascii_lowercase())
    };

    if valid {
        Ok(index)
    } else {
        Err(CoreError::OutOfAlphabet { symbol })
    }
}

/// Maps a column back to its symbol.
pub fn decode(index: usize) -> Option<char> {
    match index {
        i if i < LETTERS => char::from_u32(i as u32 + LETTER_OFFSET),
        i if i < ALPHABET_SIZE => char::from_u32(i as u32 + DIGIT_OFFSET),
        _ => None,
    }
}

/// Iterates over every symbol of the alphabet in column order.
pub fn symbols() -> impl Iterator<Item = char> {
    (0..ALPHABET_SIZE).filter_map(decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_boundaries() {
        assert_eq!(encode('a').unwrap(), 0);
        assert_eq!(encode('z').unwrap(), 25);
        assert_eq!(encode('0').unwrap(), 26);
        assert_eq!(encode('9').unwrap(), 35);
    }

    #[test]
    fn test_encode_rejects_unsupported() {
        for symbol in ['A', 'Z', ' ', '!', '/', ':', '`', '{', 'é', '\0'] {
            let result = encode(symbol);
            assert!(
                matches!(result, Err(CoreError::OutOfAlphabet { symbol: s }) if s == symbol),
                "{symbol:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_inverts_encode() {
        for symbol in symbols() {
            assert_eq!(decode(encode(symbol).unwrap()), Some(symbol));
        }
        assert_eq!(decode(ALPHABET_SIZE), None);
    }

    #[test]
    fn test_symbols_covers_alphabet() {
        let all: String = symbols().collect();
        assert_eq!(all, "abcdefghijklmnopqrstuvwxyz0123456789");
    }
}

//! Base83 decoding used by the BlurHash format.
//!
//! BlurHash packs integers into printable strings with a custom 83-character
//! alphabet. Digits are folded left to right (`acc * 83 + digit`), so the
//! first character is the most significant.

use crate::error::DecodeError;

/// The 83-character alphabet used by BlurHash base83 encoding.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Marker for bytes outside the alphabet.
const INVALID: u8 = 255;

const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [INVALID; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// ASCII code -> digit value, computed at compile time.
static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Look up the digit value of a single character.
///
/// Returns `None` for characters outside the alphabet, including all
/// non-ASCII characters.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::digit;
/// assert_eq!(digit('0'), Some(0));
/// assert_eq!(digit('~'), Some(82));
/// assert_eq!(digit('!'), None);
/// ```
#[inline]
pub fn digit(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_LUT[ch as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Fold already-resolved digits into an integer.
///
/// Callers only ever fold the fixed-width fields of a hash (at most four
/// digits, `83^4 < 2^32`); wider input wraps instead of panicking.
#[inline]
pub(crate) fn fold(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &d| acc.wrapping_mul(83).wrapping_add(d as u32))
}

/// Decode a base83 string into an integer.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase83Character`] if the string contains a
/// character not in the base83 alphabet.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("~").unwrap(), 82);
/// assert_eq!(decode("10").unwrap(), 83);
/// ```
pub fn decode(base83_str: &str) -> Result<u32, DecodeError> {
    let mut value = 0u32;
    for ch in base83_str.chars() {
        let d = digit(ch).ok_or(DecodeError::InvalidBase83Character(ch))?;
        value = value.wrapping_mul(83).wrapping_add(d as u32);
    }
    Ok(value)
}

/// Decode a base83 string, treating unknown characters as digit `0`.
///
/// This is the lenient behavior BlurHash decoders have traditionally had.
///
/// ```
/// use blurhash_decode::base83::decode_lossy;
/// assert_eq!(decode_lossy("1!"), 83);
/// ```
pub fn decode_lossy(base83_str: &str) -> u32 {
    base83_str
        .chars()
        .fold(0u32, |acc, ch| {
            acc.wrapping_mul(83).wrapping_add(digit(ch).unwrap_or(0) as u32)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_chars() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("1").unwrap(), 1);
        assert_eq!(decode("A").unwrap(), 10);
        assert_eq!(decode("a").unwrap(), 36);
        assert_eq!(decode("#").unwrap(), 62);
        assert_eq!(decode("~").unwrap(), 82);
    }

    #[test]
    fn test_decode_multi_char() {
        // "10" in base83 = 1*83 + 0 = 83
        assert_eq!(decode("10").unwrap(), 83);
        assert_eq!(decode("00").unwrap(), 0);
        assert_eq!(decode("~~~~").unwrap(), 83 * 83 * 83 * 83 - 1);
    }

    #[test]
    fn test_decode_invalid_char() {
        assert_eq!(
            decode(" ").unwrap_err(),
            DecodeError::InvalidBase83Character(' ')
        );
        assert!(decode("!").is_err());
        assert!(decode("é").is_err());
    }

    #[test]
    fn test_decode_lossy_maps_unknown_to_zero() {
        assert_eq!(decode_lossy("!"), 0);
        assert_eq!(decode_lossy("1 "), 83);
        assert_eq!(decode_lossy("é1"), 1);
        assert_eq!(decode_lossy("LEHV"), decode("LEHV").unwrap());
    }

    #[test]
    fn test_fold_matches_decode() {
        let digits: Vec<u8> = "HV6n".chars().map(|c| digit(c).unwrap()).collect();
        assert_eq!(fold(&digits), decode("HV6n").unwrap());
        assert_eq!(fold(&[]), 0);
    }

    #[test]
    fn test_alphabet_completeness() {
        // Every character in the alphabet should decode to its index
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(ch as char), Some(i as u8));
        }
        let valid = (0u8..128).filter(|&b| digit(b as char).is_some()).count();
        assert_eq!(valid, 83);
    }
}

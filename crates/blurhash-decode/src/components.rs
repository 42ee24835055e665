//! BlurHash parsing: header validation and component extraction.
//!
//! A hash is laid out as:
//!
//! | chars   | meaning                                           |
//! |---------|---------------------------------------------------|
//! | 0       | size flag, `(x - 1) + (y - 1) * 9`                |
//! | 1       | quantized maximum AC magnitude                    |
//! | 2..6    | DC color, packed 24-bit sRGB                      |
//! | 6..     | one 2-char AC coefficient per remaining component |

use log::{debug, trace};

use crate::base83;
use crate::color::Color;
use crate::error::DecodeError;

/// Shortest possible hash: size flag, max AC and the DC color.
pub const MIN_LENGTH: usize = 6;

/// The decoded DCT components of a BlurHash.
///
/// Parsing happens once; the grid can then be rendered at any number of
/// output sizes with [`ComponentGrid::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGrid {
    components_x: u32,
    components_y: u32,
    max_ac: f64,
    colors: Vec<Color>,
}

impl ComponentGrid {
    /// Parse a hash, reading characters outside the base83 alphabet as `0`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InputTooShort`] below 6 characters and
    /// [`DecodeError::LengthMismatch`] when the length disagrees with the
    /// size flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use blurhash_decode::ComponentGrid;
    /// let grid = ComponentGrid::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 1.0).unwrap();
    /// assert_eq!(grid.dimensions(), (4, 3));
    /// assert_eq!(grid.colors().len(), 12);
    /// ```
    pub fn parse(blurhash: &str, punch: f64) -> Result<Self, DecodeError> {
        Self::parse_with(blurhash, punch, false)
    }

    /// Like [`ComponentGrid::parse`], but fails with
    /// [`DecodeError::InvalidBase83Character`] on unknown characters.
    pub fn parse_strict(blurhash: &str, punch: f64) -> Result<Self, DecodeError> {
        Self::parse_with(blurhash, punch, true)
    }

    pub(crate) fn parse_with(
        blurhash: &str,
        punch: f64,
        strict: bool,
    ) -> Result<Self, DecodeError> {
        let (components_x, components_y) = header(blurhash, strict)?;

        let actual = blurhash.chars().count();
        let expected = expected_length(components_x, components_y);
        if actual != expected {
            return Err(DecodeError::LengthMismatch { expected, actual });
        }

        let digits = blurhash
            .chars()
            .map(|ch| resolve(ch, strict))
            .collect::<Result<Vec<u8>, _>>()?;

        let max_ac = (base83::fold(&digits[1..2]) as f64 + 1.0) / 166.0;
        let ac_scale = max_ac * punch;
        debug!(
            "blurhash {components_x}x{components_y} components, max AC {max_ac:.4}, punch {punch}"
        );

        let mut colors = Vec::with_capacity((components_x * components_y) as usize);
        colors.push(Color::from_dc(base83::fold(&digits[2..6])));
        colors.extend(
            digits[MIN_LENGTH..]
                .chunks_exact(2)
                .map(|pair| Color::from_ac(base83::fold(pair), ac_scale)),
        );
        for (i, color) in colors.iter().enumerate() {
            trace!("component {i}: {color:?}");
        }

        Ok(Self {
            components_x,
            components_y,
            max_ac,
            colors,
        })
    }

    /// `(components_x, components_y)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.components_x, self.components_y)
    }

    /// Maximum AC magnitude encoded in the hash, before punch.
    pub fn max_ac(&self) -> f64 {
        self.max_ac
    }

    /// The average color.
    pub fn dc(&self) -> Color {
        self.colors[0]
    }

    /// All components, DC first, then AC in row-major order (x fastest).
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The component at horizontal frequency `nx` and vertical frequency `ny`.
    #[inline]
    pub fn get(&self, nx: u32, ny: u32) -> Color {
        self.colors[(nx + ny * self.components_x) as usize]
    }
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Only the size flag is read; the rest of the hash is not validated.
///
/// # Errors
///
/// Returns [`DecodeError::InputTooShort`] if the hash is shorter than 6 characters.
///
/// # Examples
///
/// ```
/// use blurhash_decode::components;
/// assert_eq!(components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), DecodeError> {
    header(blurhash, false)
}

/// Expected hash length for the given component counts.
pub fn expected_length(components_x: u32, components_y: u32) -> usize {
    4 + 2 * (components_x * components_y) as usize
}

fn header(blurhash: &str, strict: bool) -> Result<(u32, u32), DecodeError> {
    let mut chars = blurhash.chars();
    let actual = chars.clone().count();
    let size_flag = match chars.next() {
        Some(first) if actual >= MIN_LENGTH => resolve(first, strict)? as u32,
        _ => return Err(DecodeError::InputTooShort { actual }),
    };
    Ok((size_flag % 9 + 1, size_flag / 9 + 1))
}

fn resolve(ch: char, strict: bool) -> Result<u8, DecodeError> {
    match base83::digit(ch) {
        Some(d) => Ok(d),
        None if strict => Err(DecodeError::InvalidBase83Character(ch)),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

    #[test]
    fn test_components_extraction() {
        // Size flag 'L' = 21 = (4-1) + (3-1)*9
        assert_eq!(components(KNOWN_HASH).unwrap(), (4, 3));
        assert_eq!(components("00OZZy").unwrap(), (1, 1));
        assert_eq!(components("~00000").unwrap(), (2, 10));
    }

    #[test]
    fn test_components_too_short() {
        assert_eq!(
            components("ABC").unwrap_err(),
            DecodeError::InputTooShort { actual: 3 }
        );
        assert_eq!(
            components("").unwrap_err(),
            DecodeError::InputTooShort { actual: 0 }
        );
    }

    #[test]
    fn test_expected_length() {
        assert_eq!(expected_length(1, 1), 6);
        assert_eq!(expected_length(4, 3), 28);
        assert_eq!(expected_length(9, 9), 166);
    }

    #[test]
    fn test_parse_known_hash() {
        let grid = ComponentGrid::parse(KNOWN_HASH, 1.0).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.colors().len(), 12);
        // 'E' = 14 -> (14 + 1) / 166
        assert!((grid.max_ac() - 15.0 / 166.0).abs() < 1e-12);
        assert_eq!(grid.dc().to_srgb(), [151, 150, 149]);
        assert_eq!(grid.get(0, 0), grid.dc());
        assert_eq!(grid.get(3, 2), grid.colors()[11]);
    }

    #[test]
    fn test_length_mismatch_reports_both_lengths() {
        assert_eq!(
            ComponentGrid::parse("LEHV6nWB", 1.0).unwrap_err(),
            DecodeError::LengthMismatch {
                expected: 28,
                actual: 8
            }
        );
    }

    #[test]
    fn test_punch_scales_ac_only() {
        let normal = ComponentGrid::parse(KNOWN_HASH, 1.0).unwrap();
        let punched = ComponentGrid::parse(KNOWN_HASH, 3.0).unwrap();
        assert_eq!(normal.dc(), punched.dc());
        assert_eq!(normal.max_ac(), punched.max_ac());
        for (a, b) in normal.colors()[1..].iter().zip(&punched.colors()[1..]) {
            assert!((a.r * 3.0 - b.r).abs() < 1e-12);
            assert!((a.g * 3.0 - b.g).abs() < 1e-12);
            assert!((a.b * 3.0 - b.b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unknown_characters_lenient_and_strict() {
        // '!' stands in for '0' in lenient mode
        let lenient = ComponentGrid::parse("00!ZZy", 1.0).unwrap();
        let reference = ComponentGrid::parse("000ZZy", 1.0).unwrap();
        assert_eq!(lenient, reference);

        assert_eq!(
            ComponentGrid::parse_strict("00!ZZy", 1.0).unwrap_err(),
            DecodeError::InvalidBase83Character('!')
        );
        assert!(ComponentGrid::parse_strict("00OZZy", 1.0).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Six characters, eight bytes
        let grid = ComponentGrid::parse("00ééZy", 1.0).unwrap();
        assert_eq!(grid.dimensions(), (1, 1));
        assert_eq!(
            ComponentGrid::parse("0é", 1.0).unwrap_err(),
            DecodeError::InputTooShort { actual: 2 }
        );
    }
}

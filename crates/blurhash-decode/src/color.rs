//! Color space conversion and DC/AC component decoding.
//!
//! BlurHash stores its DC term as an sRGB triple and its AC terms as
//! quantized, sign-preserving squares. Both are reconstructed here as
//! linear-light [`Color`] values; [`linear_to_srgb`] brings the synthesized
//! pixels back to bytes.

use std::ops::{Add, AddAssign, Mul};

/// A linear-light RGB triple.
///
/// Channels are unbounded while components are summed and are only clamped
/// to `[0.0, 1.0]` when converted back to sRGB.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Black / the additive identity.
    pub const ZERO: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decode the DC (average) color from its 24-bit packed sRGB value.
    ///
    /// Only the low 24 bits are used: red is bits 16..24, green 8..16 and
    /// blue 0..8.
    ///
    /// ```
    /// use blurhash_decode::Color;
    /// let white = Color::from_dc(0xFF_FF_FF);
    /// assert!((white.r - 1.0).abs() < 1e-9);
    /// ```
    pub fn from_dc(value: u32) -> Self {
        Self {
            r: srgb_to_linear(((value >> 16) & 0xFF) as u8),
            g: srgb_to_linear(((value >> 8) & 0xFF) as u8),
            b: srgb_to_linear((value & 0xFF) as u8),
        }
    }

    /// Decode an AC coefficient from its base-19 packed value.
    ///
    /// Each channel digit `d` in `0..19` maps to
    /// `sign_pow((d - 9) / 9, 2) * scale`, where `scale` is the hash's maximum
    /// AC magnitude already multiplied by punch.
    pub fn from_ac(value: u32, scale: f64) -> Self {
        let quant_r = (value / (19 * 19)) as f64;
        let quant_g = ((value / 19) % 19) as f64;
        let quant_b = (value % 19) as f64;

        Self {
            r: sign_pow((quant_r - 9.0) / 9.0, 2.0) * scale,
            g: sign_pow((quant_g - 9.0) / 9.0, 2.0) * scale,
            b: sign_pow((quant_b - 9.0) / 9.0, 2.0) * scale,
        }
    }

    /// Convert to sRGB bytes, clamping each channel.
    #[inline]
    pub fn to_srgb(self) -> [u8; 3] {
        [
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
        ]
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, factor: f64) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

/// Convert an sRGB byte value (0..=255) to linear RGB (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::srgb_to_linear;
/// assert!((srgb_to_linear(0) - 0.0).abs() < 1e-10);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-10);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    let v = value as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear RGB value to an sRGB byte value (0..=255).
///
/// Values outside \[0.0, 1.0\] are clamped. Rounding is half-up.
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(7.5), 255);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let scaled = if v <= 0.003_130_8 {
        v * 12.92 * 255.0
    } else {
        (1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0
    };
    // Bounded to [0.0, 255.0] by the clamp above.
    (scaled + 0.5) as u8
}

/// Compute `sign(value) * |value|^exp`.
///
/// The sign of zero is preserved as well, so `sign_pow(-0.0, 2.0)` is `-0.0`.
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-10);
/// assert!((sign_pow(-4.0, 0.5) - (-2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_boundary() {
        assert!((srgb_to_linear(0) - 0.0).abs() < 1e-10);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_to_linear_known_values() {
        // sRGB 128 should be approximately 0.2158605
        let val = srgb_to_linear(128);
        assert!((val - 0.2158605).abs() < 1e-6, "got {val}");
        // 10/255 is still in the linear segment
        assert!((srgb_to_linear(10) - (10.0 / 255.0) / 12.92).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_to_linear_monotonic() {
        let mut prev = srgb_to_linear(0);
        for i in 1..=255u8 {
            let curr = srgb_to_linear(i);
            assert!(curr > prev, "not monotonic at {i}: {prev} >= {curr}");
            prev = curr;
        }
    }

    #[test]
    fn test_linear_to_srgb_clamp() {
        assert_eq!(linear_to_srgb(-0.5), 0);
        assert_eq!(linear_to_srgb(1.5), 255);
        assert_eq!(linear_to_srgb(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_linear_to_srgb_threshold() {
        // 0.003 * 12.92 * 255 = 9.88 -> 10
        assert_eq!(linear_to_srgb(0.003), 10);
        assert!(linear_to_srgb(0.003) < linear_to_srgb(0.004));
    }

    #[test]
    fn test_roundtrip_srgb() {
        for i in 0..=255u8 {
            let back = linear_to_srgb(srgb_to_linear(i));
            assert!(
                (i as i16 - back as i16).unsigned_abs() <= 1,
                "roundtrip failed for {i}: got {back}"
            );
        }
    }

    #[test]
    fn test_sign_pow() {
        assert!((sign_pow(3.0, 2.0) - 9.0).abs() < 1e-10);
        assert!((sign_pow(-3.0, 2.0) - (-9.0)).abs() < 1e-10);
        assert_eq!(sign_pow(0.0, 2.0), 0.0);
        assert!(sign_pow(-0.0, 2.0).is_sign_negative());
    }

    #[test]
    fn test_from_dc_splits_channels() {
        // "HV6n" from the reference hash packs (151, 150, 149)
        let dc = Color::from_dc(9_934_485);
        assert_eq!(dc.to_srgb(), [151, 150, 149]);
        // Bits above 24 are ignored
        assert_eq!(Color::from_dc(0x0100_0000), Color::ZERO);
    }

    #[test]
    fn test_from_ac_neutral_and_extremes() {
        // Digit 9 in every channel is a zero coefficient
        let neutral = Color::from_ac(9 * 361 + 9 * 19 + 9, 0.5);
        assert_eq!(neutral, Color::new(0.0, 0.0, 0.0));

        // Digit 0 -> -scale, digit 18 -> +scale
        let c = Color::from_ac(18 * 19, 0.25);
        assert!((c.r + 0.25).abs() < 1e-12);
        assert!((c.g - 0.25).abs() < 1e-12);
        assert!((c.b + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_from_ac_quadratic_falloff() {
        // Digit 12 -> (3/9)^2 = 1/9 of the scale
        let c = Color::from_ac(12, 0.9);
        assert!((c.b - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_color_arithmetic() {
        let mut acc = Color::ZERO;
        acc += Color::new(0.1, 0.2, 0.3) * 2.0;
        acc = acc + Color::new(0.1, 0.1, 0.1);
        assert!((acc.r - 0.3).abs() < 1e-12);
        assert!((acc.g - 0.5).abs() < 1e-12);
        assert!((acc.b - 0.7).abs() < 1e-12);
    }
}

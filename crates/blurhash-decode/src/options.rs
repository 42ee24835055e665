//! Decode configuration.

/// Output width used when the caller does not request a size.
pub const DEFAULT_WIDTH: u32 = 32;
/// Output height used when the caller does not request a size.
pub const DEFAULT_HEIGHT: u32 = 32;
/// Punch applied when the caller does not supply one.
pub const DEFAULT_PUNCH: f64 = 1.0;

/// Options controlling a single decode.
///
/// ```
/// use blurhash_decode::DecodeOptions;
///
/// let opts = DecodeOptions::new(64, 48).with_punch(1.5);
/// assert_eq!(opts.size(), (64, 48));
///
/// // A zero dimension means "unspecified"
/// assert_eq!(DecodeOptions::new(0, 0).size(), (32, 32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Requested output width. `0` selects the default size.
    pub width: u32,
    /// Requested output height. `0` selects the default size.
    pub height: u32,
    /// Contrast multiplier for the AC components (1.0 = as encoded).
    pub punch: f64,
    /// Reject characters outside the base83 alphabet instead of reading them
    /// as digit `0`.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            punch: DEFAULT_PUNCH,
            strict: false,
        }
    }
}

impl DecodeOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_punch(mut self, punch: f64) -> Self {
        self.punch = punch;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The effective output size.
    ///
    /// An empty request (either dimension zero) falls back to 32x32 as a
    /// whole; a half-specified size is not completed from the default.
    pub fn size(&self) -> (u32, u32) {
        resolve_size(self.width, self.height)
    }
}

/// Resolve a requested size, substituting the default for an empty one.
pub(crate) fn resolve_size(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    } else {
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_32_square_unit_punch() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.size(), (32, 32));
        assert_eq!(opts.punch, 1.0);
        assert!(!opts.strict);
    }

    #[test]
    fn empty_sizes_resolve_to_default() {
        assert_eq!(resolve_size(0, 0), (32, 32));
        assert_eq!(resolve_size(0, 10), (32, 32));
        assert_eq!(resolve_size(10, 0), (32, 32));
        assert_eq!(resolve_size(1, 1), (1, 1));
        assert_eq!(resolve_size(300, 20), (300, 20));
    }

    #[test]
    fn builders_set_fields() {
        let opts = DecodeOptions::new(8, 4).with_punch(2.0).strict(true);
        assert_eq!(opts.width, 8);
        assert_eq!(opts.height, 4);
        assert_eq!(opts.punch, 2.0);
        assert!(opts.strict);
    }
}

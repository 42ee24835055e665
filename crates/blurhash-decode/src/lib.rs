//! # blurhash-decode
//!
//! BlurHash placeholder decoding in pure Rust.
//!
//! [BlurHash](https://blurha.sh/) is a compact representation of a placeholder
//! for an image. This crate expands a hash into an RGBA image of any size,
//! suitable for showing while the real image loads.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_decode::{decode, decode_request};
//!
//! let image = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
//! assert_eq!(image.as_bytes().len(), 32 * 32 * 4);
//!
//! // Request ids carry an optional punch; a zero size means 32x32.
//! let image = decode_request("LEHV6nWB2yk8pyo0adR*.7kCMdnj?punch=1.2", 0, 0).unwrap();
//! assert_eq!((image.width(), image.height()), (32, 32));
//! ```
//!
//! ## Features
//!
//! * `parallel` renders rows on the rayon thread pool.
//! * `image` adds [`PixelBuffer::into_rgba_image`].

pub mod base83;
pub mod color;
pub mod error;

mod components;
mod options;
mod pixels;
mod request;
mod synth;

// Re-export primary types and functions at crate root.
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear, Color};
pub use components::{components, expected_length, ComponentGrid, MIN_LENGTH};
pub use error::DecodeError;
pub use options::{DecodeOptions, DEFAULT_HEIGHT, DEFAULT_PUNCH, DEFAULT_WIDTH};
pub use pixels::{PixelBuffer, CHANNELS};
pub use request::ImageRequest;

/// Decode a BlurHash string into an RGBA image.
///
/// # Arguments
///
/// * `blurhash` - The BlurHash string to decode.
/// * `width` - The desired output image width.
/// * `height` - The desired output image height.
/// * `punch` - Factor to boost/reduce contrast of the decoded image (1.0 = normal).
///
/// A zero `width` or `height` means "unspecified" and produces a 32x32 image.
/// Characters outside the base83 alphabet are read as `0`; use
/// [`decode_with_options`] with `strict` set to reject them.
///
/// # Errors
///
/// Returns an error if the hash is shorter than 6 characters or its length
/// does not match its size flag.
///
/// # Examples
///
/// ```
/// use blurhash_decode::decode;
/// let image = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 4, 3, 1.0).unwrap();
/// assert_eq!(image.pixels().count(), 12);
/// ```
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<PixelBuffer, DecodeError> {
    decode_with_options(blurhash, &DecodeOptions::new(width, height).with_punch(punch))
}

/// Decode a BlurHash string using explicit [`DecodeOptions`].
///
/// # Errors
///
/// As [`decode`], plus [`DecodeError::InvalidBase83Character`] in strict mode.
pub fn decode_with_options(
    blurhash: &str,
    options: &DecodeOptions,
) -> Result<PixelBuffer, DecodeError> {
    let grid = ComponentGrid::parse_with(blurhash, options.punch, options.strict)?;
    let (width, height) = options.size();
    Ok(grid.render(width, height))
}

/// Decode an image-provider request id (`<blurhash>?punch=<float>`).
///
/// This is the single entry point a host image loader needs: the hash and
/// punch are split out of `id` with [`ImageRequest::parse`], and a zero
/// requested size selects the default 32x32.
///
/// # Errors
///
/// As [`decode`].
pub fn decode_request(id: &str, width: u32, height: u32) -> Result<PixelBuffer, DecodeError> {
    let request = ImageRequest::parse(id);
    decode(request.hash, width, height, request.punch)
}

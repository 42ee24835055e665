//! Error types for BlurHash decoding.

use thiserror::Error;

/// Errors that can occur while parsing a BlurHash string.
///
/// Every error is raised by the parser; once a hash has been parsed into a
/// [`ComponentGrid`](crate::ComponentGrid), rendering cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is shorter than the 6-character minimum (header plus DC).
    #[error("blurhash too short: expected at least 6 characters, got {actual}")]
    InputTooShort {
        /// The actual length, in characters.
        actual: usize,
    },

    /// The length implied by the component-count header does not match the input.
    #[error("expected blurhash of length {expected}, got {actual}")]
    LengthMismatch {
        /// `4 + 2 * components_x * components_y`.
        expected: usize,
        /// The actual length, in characters.
        actual: usize,
    },

    /// A character outside the base83 alphabet, reported in strict mode only.
    #[error("invalid base83 character: {0:?}")]
    InvalidBase83Character(char),
}

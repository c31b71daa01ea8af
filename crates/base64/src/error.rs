//! Error types.

use thiserror::Error;

use crate::charset::CharsetError;

/// The URL-safe input has a length no canonically padded base64 string can
/// unescape to (`length % 4 == 1`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid URL-safe base64 length {length} (mod 4 == 1): {input:?}")]
pub struct InvalidEncodingError {
    /// The offending input, as passed to `unescape`.
    pub input: String,
    /// Length of the input in characters.
    pub length: usize,
}

/// Error returned by the decode operations.
///
/// Every variant is transparent: the underlying error's message and source are
/// passed through as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64UrlError {
    /// Malformed length, see [`InvalidEncodingError`].
    #[error(transparent)]
    InvalidEncoding(#[from] InvalidEncodingError),
    /// The standard base64 codec rejected the unescaped text.
    #[error(transparent)]
    Decoding(#[from] base64::DecodeError),
    /// The decoded bytes are not valid in the requested charset.
    #[error(transparent)]
    Charset(#[from] CharsetError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid padding character {0:?}")]
    InvalidPadding(char),
}

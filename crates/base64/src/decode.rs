//! URL-safe base64 decoding.

use crate::charset::Charset;
use crate::error::Base64UrlError;
use crate::standard;
use crate::unescape::unescape;

/// Decodes URL-safe base64 to bytes.
///
/// # Arguments
///
/// * `text` - URL-safe base64 text, without padding.
/// * `padding` - The padding character used to rebuild standard base64.
///   Any other padding character found in the text, including `=`, is
///   rejected by the standard codec.
///
/// # Returns
///
/// The decoded bytes.
///
/// # Errors
///
/// - [`Base64UrlError::InvalidEncoding`] if the length is `1 (mod 4)`.
/// - [`Base64UrlError::Decoding`] if the standard codec rejects the unescaped
///   text, e.g. because of a character outside the alphabet.
///
/// # Example
///
/// ```
/// use urlsafe_base64::decode_to_bytes;
///
/// assert_eq!(decode_to_bytes("SGVsbG8gV29ybGQh", '=').unwrap(), b"Hello World!");
/// assert_eq!(decode_to_bytes("-_8", '=').unwrap(), [0xfb, 0xff]);
/// ```
pub fn decode_to_bytes(text: &str, padding: char) -> Result<Vec<u8>, Base64UrlError> {
    let standard_text = unescape(text, padding)?;
    Ok(standard::decode(&standard_text, padding)?)
}

/// Decodes URL-safe base64 to bytes, then to text using `charset`.
///
/// # Errors
///
/// Everything [`decode_to_bytes`] returns, plus [`Base64UrlError::Charset`]
/// when the bytes are not valid in `charset`.
///
/// # Example
///
/// ```
/// use urlsafe_base64::{decode_to_text, Charset};
///
/// assert_eq!(decode_to_text("aGVsbG8gd29ybGQ", Charset::Utf8, '=').unwrap(), "hello world");
/// assert!(decode_to_text("_w", Charset::Utf8, '=').is_err());
/// ```
pub fn decode_to_text(
    text: &str,
    charset: Charset,
    padding: char,
) -> Result<String, Base64UrlError> {
    let bytes = decode_to_bytes(text, padding)?;
    Ok(charset.decode(&bytes)?)
}

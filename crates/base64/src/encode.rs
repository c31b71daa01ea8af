//! URL-safe base64 encoding.

use crate::charset::{Charset, CharsetError};
use crate::escape::escape;
use crate::standard;

/// Encodes bytes as URL-safe base64 without padding.
///
/// # Arguments
///
/// * `data` - The bytes to encode.
/// * `padding` - The padding character used by the intermediate standard
///   encoding. Must not be a member of either base64 alphabet: an alphabet
///   character would be stripped along with the padding, losing data. This is
///   not checked; use [`Config`](crate::Config) for a validated padding.
///
/// # Returns
///
/// A URL-safe base64 string without padding.
///
/// # Example
///
/// ```
/// use urlsafe_base64::{encode_bytes, Config};
///
/// assert_eq!(encode_bytes(b"Hello World!", '='), "SGVsbG8gV29ybGQh");
/// assert_eq!(encode_bytes(b"hello world", '='), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode_bytes(&[0xfb, 0xff], '='), "-_8");
///
/// assert!(Config::new().with_padding('A').is_err());
/// ```
pub fn encode_bytes(data: &[u8], padding: char) -> String {
    escape(&standard::encode(data, padding), padding)
}

/// Encodes text, converted to bytes with `charset`, as URL-safe base64.
///
/// Same padding rules as [`encode_bytes`].
///
/// # Errors
///
/// Returns the charset's error if `text` cannot be represented in it.
///
/// # Example
///
/// ```
/// use urlsafe_base64::{encode_text, Charset};
///
/// assert_eq!(encode_text("hello world", Charset::Utf8, '=').unwrap(), "aGVsbG8gd29ybGQ");
/// assert_eq!(encode_text("Hi", Charset::Utf16Le, '=').unwrap(), "SABpAA");
/// ```
pub fn encode_text(text: &str, charset: Charset, padding: char) -> Result<String, CharsetError> {
    let bytes = charset.encode(text)?;
    Ok(encode_bytes(&bytes, padding))
}

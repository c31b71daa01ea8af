//! URL-safe base64 to standard base64.

use crate::error::InvalidEncodingError;

/// Converts URL-safe base64 text back to canonically padded standard base64.
///
/// `-` becomes `+` and `_` becomes `/`, then padding is reconstructed from the
/// length: a remainder of 2 gets two copies of `padding`, 3 gets one, 0 gets
/// none. A remainder of 1 cannot come from any base64 encoding and is
/// rejected.
///
/// # Arguments
///
/// * `text` - URL-safe base64 text without padding.
/// * `padding` - The padding character to append.
///
/// # Returns
///
/// Canonically padded standard base64 text.
///
/// # Errors
///
/// Returns [`InvalidEncodingError`] if the length in characters is `1 (mod 4)`.
///
/// # Example
///
/// ```
/// use urlsafe_base64::unescape;
///
/// assert_eq!(
///     unescape("SGVsbG8gV29y_bGQhIEhlbG-xvIQ", '=').unwrap(),
///     "SGVsbG8gV29y/bGQhIEhlbG+xvIQ=="
/// );
/// assert!(unescape("SGVsbG8gV", '=').is_err());
/// ```
pub fn unescape(text: &str, padding: char) -> Result<String, InvalidEncodingError> {
    let mut result = String::with_capacity(text.len() + 2);
    let mut length = 0;
    for c in text.chars() {
        result.push(match c {
            '-' => '+',
            '_' => '/',
            c => c,
        });
        length += 1;
    }

    let appended = match length % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        remainder => {
            tracing::debug!(length, remainder, "rejecting URL-safe base64 of impossible length");
            return Err(InvalidEncodingError {
                input: text.to_owned(),
                length,
            });
        }
    };
    tracing::trace!(remainder = length % 4, appended, "reconstructed padding");
    result.extend(std::iter::repeat(padding).take(appended));
    Ok(result)
}

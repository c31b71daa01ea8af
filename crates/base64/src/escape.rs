//! Standard base64 to URL-safe base64.

/// Converts standard base64 text to its URL-safe form.
///
/// Every trailing copy of `padding` is removed, then `+` becomes `-` and `/`
/// becomes `_` across the whole string. The input alphabet is not validated;
/// other characters pass through unchanged.
///
/// # Arguments
///
/// * `text` - Standard base64 text, padded with `padding`.
/// * `padding` - The padding character. It must not belong to either base64
///   alphabet, otherwise trailing data equal to it is stripped as well. It is
///   not checked here; [`Config::with_padding`](crate::Config::with_padding)
///   validates it.
///
/// # Returns
///
/// The URL-safe text, without padding.
///
/// # Example
///
/// ```
/// use urlsafe_base64::escape;
///
/// assert_eq!(escape("SGVsbG8gV29y/bGQhIEhlbG+xvIQ==", '='), "SGVsbG8gV29y_bGQhIEhlbG-xvIQ");
/// assert_eq!(escape("Zg**", '*'), "Zg");
/// ```
pub fn escape(text: &str, padding: char) -> String {
    text.trim_end_matches(padding)
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect()
}

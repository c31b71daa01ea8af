//! Adapter over the standard base64 codec from the `base64` crate.
//!
//! `STANDARD` only knows `=`; the caller's padding character is swapped in and
//! out on the trailing padding run.

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};

use crate::constants::PAD;

/// Encodes `data` as canonically padded standard base64, padded with `padding`.
pub(crate) fn encode(data: &[u8], padding: char) -> String {
    let encoded = STANDARD.encode(data);
    if padding == PAD {
        return encoded;
    }
    let body = encoded.trim_end_matches(PAD);
    let padded = encoded.len() - body.len();
    let mut result = String::with_capacity(body.len() + padded * padding.len_utf8());
    result.push_str(body);
    result.extend(std::iter::repeat(padding).take(padded));
    result
}

/// Decodes standard base64 text whose trailing padding uses `padding`.
pub(crate) fn decode(text: &str, padding: char) -> Result<Vec<u8>, DecodeError> {
    let result = if padding == PAD {
        STANDARD.decode(text)
    } else {
        normalize_padding(text, padding).and_then(|normalized| STANDARD.decode(normalized))
    };
    if let Err(err) = &result {
        tracing::debug!(error = %err, "standard base64 codec rejected input");
    }
    result
}

/// Rewrites the trailing run of `padding` to `=`.
///
/// A literal `=` is outside the alphabet when another padding character is in
/// use, so it is rejected here instead of reaching `STANDARD` as padding.
fn normalize_padding(text: &str, padding: char) -> Result<String, DecodeError> {
    let body = text.trim_end_matches(padding);
    if let Some(index) = body.find(PAD) {
        return Err(DecodeError::InvalidByte(index, PAD as u8));
    }
    let padded = text[body.len()..].chars().count();
    let mut normalized = String::with_capacity(body.len() + padded);
    normalized.push_str(body);
    normalized.extend(std::iter::repeat(PAD).take(padded));
    Ok(normalized)
}

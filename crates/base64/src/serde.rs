//! Serde helpers for byte fields stored as URL-safe base64 strings.
//!
//! Use with `#[serde(with = "urlsafe_base64::serde")]` on a `Vec<u8>` field.

use ::serde::de::{Deserialize, Deserializer, Error as _};
use ::serde::Serializer;

use crate::constants::PAD;

/// Serializes bytes as an unpadded URL-safe base64 string.
pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    serializer.serialize_str(&crate::encode_bytes(bytes.as_ref(), PAD))
}

/// Deserializes an unpadded URL-safe base64 string into bytes.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    crate::decode_to_bytes(&text, PAD).map_err(D::Error::custom)
}

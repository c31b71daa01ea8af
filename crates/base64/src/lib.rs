//! URL-safe base64 encoding and decoding.
//!
//! Converts between the standard base64 alphabet (`+`, `/`, trailing padding)
//! and the URL-safe one (`-`, `_`, no padding), reconstructing padding from
//! the length on the way back. The bit-level base64 transform is delegated to
//! the `base64` crate.
//!
//! The padding character is a parameter of every operation; [`PAD`] (`'='`)
//! is the conventional choice. [`Config`] bundles a validated padding
//! character with a [`Charset`] for the text variants.
//!
//! # Example
//!
//! ```
//! use urlsafe_base64::{decode_to_bytes, encode_bytes, escape, unescape, PAD};
//!
//! let encoded = encode_bytes(b"hello world", PAD);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//! assert_eq!(decode_to_bytes(&encoded, PAD).unwrap(), b"hello world");
//!
//! assert_eq!(escape("a+b/cQ==", PAD), "a-b_cQ");
//! assert_eq!(unescape("a-b_cQ", PAD).unwrap(), "a+b/cQ==");
//! ```

mod charset;
mod config;
mod constants;
mod decode;
mod encode;
mod error;
mod escape;
#[cfg(feature = "serde")]
pub mod serde;
mod standard;
mod unescape;

pub use base64::DecodeError;
pub use charset::{Charset, CharsetError};
pub use config::Config;
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use decode::{decode_to_bytes, decode_to_text};
pub use encode::{encode_bytes, encode_text};
pub use error::{Base64UrlError, ConfigError, InvalidEncodingError};
pub use escape::escape;
pub use unescape::unescape;

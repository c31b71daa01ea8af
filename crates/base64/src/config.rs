//! Padding and charset defaults bundled into one value.

use crate::charset::{Charset, CharsetError};
use crate::constants::{ALPHABET, ALPHABET_URL, PAD};
use crate::error::{Base64UrlError, ConfigError, InvalidEncodingError};

/// Options shared by all operations.
///
/// Defaults to `'='` padding and UTF-8.
///
/// # Example
///
/// ```
/// use urlsafe_base64::{Charset, Config};
///
/// let config = Config::new().with_padding('*').unwrap().with_charset(Charset::Latin1);
/// let encoded = config.encode_text("né").unwrap();
/// assert_eq!(config.decode_to_text(&encoded).unwrap(), "né");
/// assert!(Config::new().with_padding('A').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    padding: char,
    charset: Charset,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            padding: PAD,
            charset: Charset::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the padding character.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPadding`] for characters that would be
    /// confused with encoded data: non-ASCII, control characters and members
    /// of either base64 alphabet.
    pub fn with_padding(self, padding: char) -> Result<Self, ConfigError> {
        if !padding.is_ascii()
            || padding.is_ascii_control()
            || ALPHABET.contains(padding)
            || ALPHABET_URL.contains(padding)
        {
            return Err(ConfigError::InvalidPadding(padding));
        }
        Ok(Config { padding, ..self })
    }

    pub fn with_charset(self, charset: Charset) -> Self {
        Config { charset, ..self }
    }

    pub fn padding(&self) -> char {
        self.padding
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn escape(&self, text: &str) -> String {
        crate::escape(text, self.padding)
    }

    pub fn unescape(&self, text: &str) -> Result<String, InvalidEncodingError> {
        crate::unescape(text, self.padding)
    }

    pub fn encode_bytes(&self, data: &[u8]) -> String {
        crate::encode_bytes(data, self.padding)
    }

    pub fn encode_text(&self, text: &str) -> Result<String, CharsetError> {
        crate::encode_text(text, self.charset, self.padding)
    }

    pub fn decode_to_bytes(&self, text: &str) -> Result<Vec<u8>, Base64UrlError> {
        crate::decode_to_bytes(text, self.padding)
    }

    pub fn decode_to_text(&self, text: &str) -> Result<String, Base64UrlError> {
        crate::decode_to_text(text, self.charset, self.padding)
    }
}

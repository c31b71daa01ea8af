//! Named text charsets used by `encode_text` and `decode_to_text`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A text encoding, selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Ascii,
    Latin1,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CharsetError {
    #[error("unknown charset {0:?}")]
    UnknownLabel(String),
    #[error("character {ch:?} at index {index} is not representable in {charset}")]
    Unrepresentable {
        charset: Charset,
        ch: char,
        index: usize,
    },
    #[error("invalid {charset} sequence at byte offset {offset}")]
    InvalidSequence { charset: Charset, offset: usize },
}

impl Charset {
    /// Looks up a charset by label, ignoring ASCII case.
    ///
    /// ```
    /// use urlsafe_base64::Charset;
    ///
    /// assert_eq!(Charset::from_label("UTF-8").unwrap(), Charset::Utf8);
    /// assert_eq!(Charset::from_label("unicode").unwrap(), Charset::Utf16Le);
    /// assert!(Charset::from_label("ebcdic").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Charset, CharsetError> {
        let charset = match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Charset::Utf8,
            "utf-16" | "utf-16le" | "utf16" | "unicode" => Charset::Utf16Le,
            "utf-16be" | "bigendianunicode" => Charset::Utf16Be,
            "utf-32" | "utf-32le" | "utf32" => Charset::Utf32Le,
            "utf-32be" => Charset::Utf32Be,
            "ascii" | "us-ascii" => Charset::Ascii,
            "latin1" | "iso-8859-1" => Charset::Latin1,
            _ => return Err(CharsetError::UnknownLabel(label.to_owned())),
        };
        Ok(charset)
    }

    /// Canonical label.
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Utf16Le => "utf-16le",
            Charset::Utf16Be => "utf-16be",
            Charset::Utf32Le => "utf-32le",
            Charset::Utf32Be => "utf-32be",
            Charset::Ascii => "us-ascii",
            Charset::Latin1 => "iso-8859-1",
        }
    }

    /// Converts text to bytes. No byte-order mark is written.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, CharsetError> {
        let bytes = match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf32Le => text.chars().flat_map(|c| u32::from(c).to_le_bytes()).collect(),
            Charset::Utf32Be => text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect(),
            Charset::Ascii => self.encode_single_byte(text, 0x7f)?,
            Charset::Latin1 => self.encode_single_byte(text, 0xff)?,
        };
        Ok(bytes)
    }

    /// Converts bytes to text. A leading byte-order mark is kept as `U+FEFF`.
    pub fn decode(self, bytes: &[u8]) -> Result<String, CharsetError> {
        let result = match self {
            Charset::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|err| {
                self.invalid_at(err.utf8_error().valid_up_to())
            }),
            Charset::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
            Charset::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            Charset::Utf32Le => self.decode_utf32(bytes, u32::from_le_bytes),
            Charset::Utf32Be => self.decode_utf32(bytes, u32::from_be_bytes),
            Charset::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(self.invalid_at(offset)),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        };
        if let Err(err) = &result {
            tracing::debug!(charset = self.name(), error = %err, "charset rejected bytes");
        }
        result
    }

    fn encode_single_byte(self, text: &str, max: u32) -> Result<Vec<u8>, CharsetError> {
        text.chars()
            .enumerate()
            .map(|(index, ch)| match u8::try_from(u32::from(ch)) {
                Ok(b) if u32::from(b) <= max => Ok(b),
                _ => {
                    tracing::debug!(charset = self.name(), index, "character not representable");
                    Err(CharsetError::Unrepresentable {
                        charset: self,
                        ch,
                        index,
                    })
                }
            })
            .collect()
    }

    fn decode_utf16(
        self,
        bytes: &[u8],
        from_bytes: fn([u8; 2]) -> u16,
    ) -> Result<String, CharsetError> {
        let units = bytes
            .chunks_exact(2)
            .map(|pair| from_bytes([pair[0], pair[1]]));
        let mut text = String::with_capacity(bytes.len() / 2);
        let mut offset = 0;
        for decoded in char::decode_utf16(units) {
            let ch = decoded.map_err(|_| self.invalid_at(offset))?;
            text.push(ch);
            offset += ch.len_utf16() * 2;
        }
        if bytes.len() % 2 != 0 {
            return Err(self.invalid_at(bytes.len() - 1));
        }
        Ok(text)
    }

    fn decode_utf32(
        self,
        bytes: &[u8],
        from_bytes: fn([u8; 4]) -> u32,
    ) -> Result<String, CharsetError> {
        let mut text = String::with_capacity(bytes.len() / 4);
        for (i, quad) in bytes.chunks_exact(4).enumerate() {
            let scalar = from_bytes([quad[0], quad[1], quad[2], quad[3]]);
            let ch = char::from_u32(scalar).ok_or_else(|| self.invalid_at(i * 4))?;
            text.push(ch);
        }
        if bytes.len() % 4 != 0 {
            return Err(self.invalid_at(bytes.len() - bytes.len() % 4));
        }
        Ok(text)
    }

    fn invalid_at(self, offset: usize) -> CharsetError {
        CharsetError::InvalidSequence {
            charset: self,
            offset,
        }
    }
}

impl FromStr for Charset {
    type Err = CharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Charset::from_label(s)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

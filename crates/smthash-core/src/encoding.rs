//! Hex and UTF-8 conversions shared by the encoder, digests and the normalizer.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::bytes::ByteString;
use crate::digest::Digest;
use crate::errors::EncodingError;

static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").expect("invalid regex"));

/// Returns `true` when `text` is a non-empty run of hex digits (either case).
pub fn is_hex_string(text: &str) -> bool {
    HEX_PATTERN.is_match(text)
}

/// Decodes hex text into bytes.
///
/// # Errors
///
/// [`EncodingError::InvalidHex`] for characters outside `[0-9a-fA-F]` or empty
/// input, [`EncodingError::OddLength`] when the digits do not pair up.
pub fn hex_to_bytes(text: &str) -> Result<ByteString, EncodingError> {
    HexString::parse(text).map(HexString::into_bytes)
}

/// Lowercase hex rendering of arbitrary bytes.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// UTF-8 encodes `text`, then renders the bytes as lowercase hex.
pub fn text_to_hex(text: &str) -> String {
    bytes_to_hex(text.as_bytes())
}

/// Lowercase hex rendering of a digest.
pub fn digest_to_hex(digest: &Digest) -> String {
    bytes_to_hex(digest.as_bytes())
}

/// Validated hex text together with the bytes it denotes.
///
/// Input case is preserved in [`HexString::as_str`]; the decoded bytes are
/// the same for `"AaBb"` and `"aabb"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexString {
    text: String,
    bytes: ByteString,
}

impl HexString {
    /// Parses and validates hex text.
    pub fn parse(value: impl Into<String>) -> Result<Self, EncodingError> {
        let text = value.into();
        if !is_hex_string(&text) {
            return Err(EncodingError::InvalidHex { value: text });
        }
        let bytes = match hex::decode(&text) {
            Ok(bytes) => bytes,
            Err(hex::FromHexError::OddLength) => {
                let len = text.len();
                return Err(EncodingError::OddLength { value: text, len });
            }
            Err(_) => return Err(EncodingError::InvalidHex { value: text }),
        };
        Ok(Self {
            text,
            bytes: bytes.into(),
        })
    }

    /// The hex text as supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The decoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the hex string and returns the decoded bytes.
    pub fn into_bytes(self) -> ByteString {
        self.bytes
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for HexString {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_alphabet_check() {
        assert!(is_hex_string("deadBEEF"));
        assert!(is_hex_string("0"));
        assert!(!is_hex_string("xyz"));
        assert!(!is_hex_string(""));
        assert!(!is_hex_string("0xab"));
        assert!(!is_hex_string("ab cd"));
    }

    #[test]
    fn odd_length_is_rejected() {
        assert_eq!(
            hex_to_bytes("abc"),
            Err(EncodingError::OddLength {
                value: "abc".into(),
                len: 3
            })
        );
    }

    #[test]
    fn invalid_characters_name_the_input() {
        let err = hex_to_bytes("12zz").unwrap_err();
        assert_eq!(
            err,
            EncodingError::InvalidHex {
                value: "12zz".into()
            }
        );
        assert!(err.to_string().contains("12zz"));
    }

    #[test]
    fn mixed_case_decodes_identically() {
        let upper = HexString::parse("AaBb").unwrap();
        let lower = HexString::parse("aabb").unwrap();
        assert_eq!(upper.as_bytes(), lower.as_bytes());
        assert_eq!(upper.as_str(), "AaBb");
    }

    #[test]
    fn text_to_hex_uses_utf8() {
        assert_eq!(text_to_hex("abc"), "616263");
        assert_eq!(text_to_hex("é"), "c3a9");
        assert_eq!(text_to_hex(""), "");
    }
}

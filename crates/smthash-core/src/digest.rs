use std::fmt;
use std::str::FromStr;

use base64::Engine;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::bytes::ByteString;
use crate::encoding::{bytes_to_hex, hex_to_bytes};
use crate::errors::EncodingError;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 output of the hash combinator.
///
/// Displays and serializes as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a digest from a slice, checking its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncodingError> {
        let array: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| EncodingError::DigestLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Parses a digest from hex text (either case).
    pub fn from_hex(text: &str) -> Result<Self, EncodingError> {
        let bytes = hex_to_bytes(text)?;
        Self::from_slice(&bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// URL-safe base64 without padding.
    pub fn to_base64url(&self) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.0)
    }

    /// Copies the digest into a byte string, e.g. to feed it into another hash.
    pub fn to_byte_string(&self) -> ByteString {
        ByteString::from(&self.0[..])
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Digest::from_hex(&text).map_err(de::Error::custom)
    }
}

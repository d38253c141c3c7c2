use std::ops::Deref;

/// Owned byte sequence used as the canonical intermediate form of every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Creates an empty byte string.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty byte string with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends `other` to the end of this byte string.
    pub fn append(&mut self, other: impl AsRef<[u8]>) {
        self.0.extend_from_slice(other.as_ref());
    }

    /// Concatenates byte strings left to right.
    pub fn concat<I, B>(parts: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut out = Self::new();
        for part in parts {
            out.append(part);
        }
        out
    }

    /// Borrows the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the byte string and returns the underlying vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        crate::encoding::bytes_to_hex(&self.0)
    }

    /// Parses hex text into bytes.
    pub fn from_hex(text: &str) -> Result<Self, crate::EncodingError> {
        crate::encoding::hex_to_bytes(text)
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<ByteString> for Vec<u8> {
    fn from(bytes: ByteString) -> Self {
        bytes.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut bytes = ByteString::from(vec![0xab]);
        bytes.append([0xcd]);
        bytes.append(ByteString::new());
        assert_eq!(bytes.as_bytes(), &[0xab, 0xcd]);
    }

    #[test]
    fn concat_matches_manual_append() {
        let joined = ByteString::concat([&[1u8, 2][..], &[], &[3]]);
        assert_eq!(joined.into_vec(), vec![1, 2, 3]);
    }
}

use smthash_canonical::CanonicalizationError;
use thiserror::Error;

/// A string presented as hex data is not valid hex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Characters outside `[0-9a-fA-F]`, or an empty string.
    #[error("not a hex string: '{value}'")]
    InvalidHex {
        /// Offending string.
        value: String,
    },
    /// Hex digits do not pair up into whole bytes.
    #[error("hex string '{value}' has odd length {len}")]
    OddLength {
        /// Offending string.
        value: String,
        /// Number of hex digits.
        len: usize,
    },
    /// Decoded bytes do not have the size of a SHA-256 digest.
    #[error("digest must be {expected} bytes, got {actual}")]
    DigestLength {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// An untyped value could not be mapped onto a hash input variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The value is not one of the supported input kinds.
    #[error("unsupported input: {0}")]
    Unsupported(String),
    /// An integer field is not a non-negative decimal number.
    #[error("invalid unsigned integer '{0}'")]
    InvalidInteger(String),
    /// A hex or bytes field failed hex validation.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// A structured object could not be normalized.
#[derive(Error, Debug)]
pub enum NormalizationError {
    /// The canonicalization routine rejected the object.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
    /// The canonical serialization could not be rendered as hex input.
    #[error("normalized output is not usable as hex input: {0}")]
    Encoding(#[from] EncodingError),
}

/// Any error raised by this crate.
#[derive(Error, Debug)]
pub enum SmtHashError {
    /// Hex validation failed.
    #[error("invalid encoding: {0}")]
    Encoding(#[from] EncodingError),
    /// An input value is unsupported.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    /// Object normalization failed.
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),
}

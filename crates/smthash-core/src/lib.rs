//! Deterministic hashing over mixed-type values.
//!
//! Integers, UTF-8 text, hex text, raw bytes and absent values are each
//! reduced to canonical bytes, concatenated in call order and hashed once
//! with SHA-256. Structured objects enter the hash as a single hex field
//! produced by [`normalize_object`].
//!
//! Every operation is a pure function of its arguments.
//!
#![deny(missing_docs)]

/// Owned byte sequences.
pub mod bytes;
/// Concatenate-then-hash combinator.
pub mod combinator;
/// SHA-256 digest value.
pub mod digest;
/// Canonical encodings per input variant.
pub mod encoder;
/// Hex and UTF-8 helpers.
pub mod encoding;
/// Error types.
pub mod errors;
/// Structured object normalization.
pub mod normalizer;

pub use bytes::ByteString;
pub use combinator::{hash, hash_all, try_hash_tagged, try_hash_values};
pub use digest::{Digest, DIGEST_LEN};
pub use encoder::{
    encode_absent, encode_hex, encode_integer, encode_text, is_canonical_byte_string, Input,
};
pub use encoding::{
    bytes_to_hex, digest_to_hex, hex_to_bytes, is_hex_string, text_to_hex, HexString,
};
pub use errors::{EncodingError, InputError, NormalizationError, SmtHashError};
pub use normalizer::{normalize, normalize_object, normalized_input};

pub use num_bigint::BigUint;

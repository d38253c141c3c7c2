//! Structural canonicalization for smthash inputs.
//!
//! A structured (JSON-like) object is reduced to one deterministic byte
//! serialization: RFC 8785 canonical JSON with sorted object keys and no
//! insignificant whitespace. The output depends only on the content of the
//! tree, never on the order in which mapping keys were inserted.
//!
//! The canonicalizer is a plain value with no interior state and can be
//! shared freely across threads.
//!
#![deny(missing_docs)]

/// Canonicalization of `serde_json` trees into deterministic bytes.
pub mod canonicalizer;
mod finite;
/// Output modes for the canonicalizer.
pub mod mode;

pub use canonicalizer::{CanonicalizationError, CanonicalizationResult, Canonicalizer};
pub use mode::CanonicalMode;

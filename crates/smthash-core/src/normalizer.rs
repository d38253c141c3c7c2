//! Structured objects reduced to hex text for use as a single hash field.

use serde::Serialize;
use serde_json::Value;
use smthash_canonical::Canonicalizer;

use crate::encoder::Input;
use crate::encoding::{text_to_hex, HexString};
use crate::errors::NormalizationError;

/// Lowercase hex of the canonical serialization of `object`.
///
/// The serialization itself is returned (not a digest of it), so the result
/// can be passed to the combinator as [`Input::Hex`]. Mapping key order does
/// not affect the output.
pub fn normalize_object(object: &Value) -> Result<String, NormalizationError> {
    let text = Canonicalizer::passthrough().canonicalize(object)?.into_text()?;
    tracing::debug!(len = text.len(), "normalized object");
    Ok(text_to_hex(&text))
}

/// Like [`normalize_object`] for any serializable value.
///
/// NaN and infinite floats fail with a path-labelled
/// `CanonicalizationError::NonFiniteNumber`.
pub fn normalize<T: Serialize + ?Sized>(object: &T) -> Result<String, NormalizationError> {
    let text = Canonicalizer::passthrough()
        .canonicalize_serializable(object)?
        .into_text()?;
    tracing::debug!(len = text.len(), "normalized serializable value");
    Ok(text_to_hex(&text))
}

/// Normalizes `object` and wraps the result as a hex input.
pub fn normalized_input(object: &Value) -> Result<Input, NormalizationError> {
    let hex = normalize_object(object)?;
    Ok(Input::Hex(HexString::parse(hex)?))
}

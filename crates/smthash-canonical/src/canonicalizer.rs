use canonical_json::to_string;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::finite::check_finite;
use crate::mode::CanonicalMode;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// The value could not be converted into a JSON tree.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// The result holds digest bytes or otherwise is not UTF-8 text.
    #[error("canonical output is not text: {0}")]
    NotText(String),
    /// Generic failure.
    #[error("other error: {0}")]
    Other(String),
}

/// Result of canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalizationResult {
    /// Canonical UTF-8 bytes, or the digest of them in [`CanonicalMode::Sha256`].
    pub bytes: Vec<u8>,
    /// Mode that produced `bytes`.
    pub mode: CanonicalMode,
}

impl CanonicalizationResult {
    /// Returns the canonical JSON text of a passthrough result.
    ///
    /// # Errors
    ///
    /// [`CanonicalizationError::NotText`] for [`CanonicalMode::Sha256`] results.
    pub fn into_text(self) -> Result<String, CanonicalizationError> {
        if !self.mode.is_passthrough() {
            return Err(CanonicalizationError::NotText(format!(
                "{:?} result holds digest bytes",
                self.mode
            )));
        }
        String::from_utf8(self.bytes).map_err(|err| CanonicalizationError::NotText(err.to_string()))
    }
}

/// Canonicalizer that emits deterministic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Canonicalizer {
    mode: CanonicalMode,
}

impl Canonicalizer {
    /// Creates a canonicalizer for the provided mode.
    pub fn new(mode: CanonicalMode) -> Self {
        Self { mode }
    }

    /// Creates a canonicalizer that serializes without hashing.
    pub fn passthrough() -> Self {
        Self::new(CanonicalMode::Passthrough)
    }

    /// Mode this canonicalizer was configured with.
    pub fn mode(&self) -> CanonicalMode {
        self.mode
    }

    /// Produces canonical bytes for a JSON tree.
    ///
    /// A `Value` cannot hold NaN or infinities, so only serialization of the
    /// tree itself can fail here.
    pub fn canonicalize(
        &self,
        value: &Value,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        // RFC 8785 canonical form: sorted keys, no whitespace
        let canonical =
            to_string(value).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
        let serialized = canonical.into_bytes();

        let bytes = match self.mode {
            CanonicalMode::Passthrough => serialized,
            CanonicalMode::Sha256 => Sha256::digest(&serialized).to_vec(),
        };

        tracing::trace!(mode = ?self.mode, len = bytes.len(), "canonicalized value");
        Ok(CanonicalizationResult {
            bytes,
            mode: self.mode,
        })
    }

    /// Converts any serializable value to a JSON tree, then canonicalizes it.
    ///
    /// Floats are checked before conversion: NaN and infinities fail with
    /// [`CanonicalizationError::NonFiniteNumber`] naming their JSON path
    /// instead of turning into `null`.
    pub fn canonicalize_serializable<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<CanonicalizationResult, CanonicalizationError> {
        check_finite(value)?;
        let tree = serde_json::to_value(value)
            .map_err(|err| CanonicalizationError::Serialization(err.to_string()))?;
        self.canonicalize(&tree)
    }
}

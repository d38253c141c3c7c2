use serde::{Deserialize, Serialize};

/// What the canonicalizer returns after serializing a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalMode {
    /// Structural serialization only; the canonical JSON bytes are returned as-is.
    #[default]
    Passthrough,
    /// The canonical JSON bytes are hashed once and the 32-byte SHA-256 digest is returned.
    #[serde(rename = "sha-256")]
    Sha256,
}

impl CanonicalMode {
    /// Returns `true` when the mode performs no hashing.
    pub fn is_passthrough(self) -> bool {
        matches!(self, CanonicalMode::Passthrough)
    }
}

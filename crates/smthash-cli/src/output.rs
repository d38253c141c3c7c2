//! Output formatting utilities.

use clap::ValueEnum;
use serde_json::Value;
use smthash_core::Digest;

/// Text form used to print a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Lowercase hex.
    Hex,
    /// URL-safe base64 without padding.
    B64,
}

/// Renders a digest in the requested form.
pub fn format_digest(digest: &Digest, format: Format) -> String {
    match format {
        Format::Hex => digest.to_hex(),
        Format::B64 => digest.to_base64url(),
    }
}

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smthash_core::smthash;

    #[test]
    fn digest_formats() {
        let digest = smthash!("abc");
        assert_eq!(
            format_digest(&digest, Format::Hex),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            format_digest(&digest, Format::B64),
            "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0"
        );
    }
}

use smthash_canonical::CanonicalizationError;
use smthash_core::SmtHashError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read.
    #[error("failed to read file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
    /// Input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The hashing library rejected an input.
    #[error("{0}")]
    SmtHash(#[from] SmtHashError),
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

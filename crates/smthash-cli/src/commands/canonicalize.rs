//! Canonicalize command implementation.

use smthash_canonical::{CanonicalMode, Canonicalizer};
use smthash_core::bytes_to_hex;

use crate::error::CliError;
use crate::input::read_json;

pub fn run(input: Option<String>, sha256: bool) -> Result<(), CliError> {
    let value = read_json(input)?;

    let mode = if sha256 {
        CanonicalMode::Sha256
    } else {
        CanonicalMode::Passthrough
    };
    let result = Canonicalizer::new(mode).canonicalize(&value)?;

    if mode.is_passthrough() {
        println!("{}", result.into_text()?);
    } else {
        println!("{}", bytes_to_hex(&result.bytes));
    }
    Ok(())
}

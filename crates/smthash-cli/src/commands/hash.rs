//! Hash command implementation.

use serde_json::json;
use smthash_core::{try_hash_tagged, SmtHashError};

use crate::error::CliError;
use crate::output::{format_digest, format_json, Format};

pub fn run(inputs: Vec<String>, format: Format, json: bool) -> Result<(), CliError> {
    let digest = try_hash_tagged(inputs.as_slice()).map_err(SmtHashError::from)?;
    tracing::info!(inputs = inputs.len(), "computed digest");

    let rendered = format_digest(&digest, format);
    if json {
        println!(
            "{}",
            format_json(&json!({
                "digest": rendered,
                "inputs": inputs.len(),
            }))
        );
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

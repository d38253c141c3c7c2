//! JSON input from a file or stdin.

use serde_json::Value;
use std::io::{self, Read};

use crate::error::CliError;

/// Reads and parses JSON from `path`, or from stdin when no path is given.
pub fn read_json(path: Option<String>) -> Result<Value, CliError> {
    let json_str = if let Some(path) = path {
        std::fs::read_to_string(&path).map_err(|source| CliError::Read { path, source })?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let value = serde_json::from_str(&json_str)?;
    tracing::debug!(bytes = json_str.len(), "parsed JSON input");
    Ok(value)
}

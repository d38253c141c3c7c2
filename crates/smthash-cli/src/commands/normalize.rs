//! Normalize command implementation.

use smthash_core::{normalize_object, SmtHashError};

use crate::error::CliError;
use crate::input::read_json;

pub fn run(input: Option<String>) -> Result<(), CliError> {
    let value = read_json(input)?;
    let hex = normalize_object(&value).map_err(SmtHashError::from)?;
    println!("{}", hex);
    Ok(())
}

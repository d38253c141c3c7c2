//! Ordered concatenate-then-hash over mixed inputs.

use serde_json::Value;
use sha2::{Digest as Sha2Digest, Sha256};

use crate::bytes::ByteString;
use crate::digest::{Digest, DIGEST_LEN};
use crate::encoder::Input;
use crate::errors::InputError;

/// Hashes the canonical bytes of `inputs`, concatenated left to right.
///
/// Formula: `sha256(canonical(inputs[0]) || canonical(inputs[1]) || ...)`
///
/// Concatenation is byte-level: `hash(&[ab, cd])` equals `hash(&[abcd])`
/// when the inputs are raw bytes.
///
/// # Example
///
/// ```rust
/// use smthash_core::{hash, Input};
///
/// let digest = hash(&[Input::text("abc")]);
/// assert_eq!(
///     digest.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash(inputs: &[Input]) -> Digest {
    let mut buffer = ByteString::new();
    for input in inputs {
        input.write_canonical(&mut buffer);
    }

    let hashed = Sha256::digest(buffer.as_bytes());
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hashed);

    tracing::trace!(inputs = inputs.len(), bytes = buffer.len(), "hashed inputs");
    Digest::new(out)
}

/// Converts each item into an [`Input`] and hashes them in order.
pub fn hash_all<I, T>(inputs: I) -> Digest
where
    I: IntoIterator<Item = T>,
    T: Into<Input>,
{
    let inputs: Vec<Input> = inputs.into_iter().map(Into::into).collect();
    hash(&inputs)
}

/// Hashes untyped JSON scalars.
///
/// Every value is converted before any hashing happens; the first
/// unsupported value aborts the call.
pub fn try_hash_values(values: &[Value]) -> Result<Digest, InputError> {
    let inputs = values
        .iter()
        .map(Input::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(hash(&inputs))
}

/// Hashes arguments in the tagged text form parsed by `Input`'s `FromStr` impl.
pub fn try_hash_tagged<S: AsRef<str>>(args: &[S]) -> Result<Digest, InputError> {
    let inputs = args
        .iter()
        .map(|arg| arg.as_ref().parse::<Input>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(hash(&inputs))
}

/// Variadic form of [`hash`]: each argument goes through `Input::from`.
///
/// ```rust
/// use smthash_core::smthash;
///
/// let id = smthash!(7u64, "owner", None::<u64>);
/// assert_eq!(id.to_hex().len(), 64);
/// ```
#[macro_export]
macro_rules! smthash {
    ($($input:expr),* $(,)?) => {
        $crate::hash(&[$($crate::Input::from($input)),*])
    };
}

//! Canonical byte encodings for each hash input variant.
//!
//! | variant        | canonical bytes                                      |
//! |----------------|------------------------------------------------------|
//! | `Bytes`        | unchanged                                            |
//! | `Integer(n)`   | minimal big-endian magnitude, `0` → `0x00`           |
//! | `Text(s)`      | UTF-8 bytes of `s`, empty string → no bytes          |
//! | `Hex(h)`       | decoded hex-digit pairs                              |
//! | `Absent`       | `0x00`, identical to `Integer(0)`                    |
//!
//! No type tag is written, so `Absent` and `Integer(0)` collide, as do
//! `Text("")` and an empty `Bytes`. Callers keep field positions typed
//! consistently.

use std::str::FromStr;

use num_bigint::BigUint;
use serde_json::Value;

use crate::bytes::ByteString;
use crate::digest::Digest;
use crate::encoding::{hex_to_bytes, HexString};
use crate::errors::{EncodingError, InputError};

/// One argument to the hash combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Bytes that are already canonical, e.g. a prior digest.
    Bytes(ByteString),
    /// Arbitrary-precision non-negative integer.
    Integer(BigUint),
    /// UTF-8 text.
    Text(String),
    /// Validated hex text denoting literal bytes.
    Hex(HexString),
    /// Missing value; encodes like `Integer(0)`.
    Absent,
}

/// Minimal big-endian encoding of `magnitude`; zero encodes as one `0x00` byte.
pub fn encode_integer(magnitude: &BigUint) -> ByteString {
    if magnitude.bits() == 0 {
        return ByteString::from(vec![0u8]);
    }
    ByteString::from(magnitude.to_bytes_be())
}

/// UTF-8 bytes of `content`.
pub fn encode_text(content: &str) -> ByteString {
    ByteString::from(content.as_bytes())
}

/// Decodes validated hex text. Odd-length input is rejected, never padded.
pub fn encode_hex(content: &str) -> Result<ByteString, EncodingError> {
    hex_to_bytes(content)
}

/// Encoding of a missing value.
pub fn encode_absent() -> ByteString {
    ByteString::from(vec![0u8])
}

/// Type check for the raw, already-canonical byte variant.
pub fn is_canonical_byte_string(input: &Input) -> bool {
    input.is_canonical_bytes()
}

impl Input {
    /// Builds an integer input.
    pub fn integer(magnitude: impl Into<BigUint>) -> Self {
        Input::Integer(magnitude.into())
    }

    /// Builds a text input.
    pub fn text(content: impl Into<String>) -> Self {
        Input::Text(content.into())
    }

    /// Validates `content` and builds a hex input.
    pub fn hex(content: impl Into<String>) -> Result<Self, EncodingError> {
        HexString::parse(content).map(Input::Hex)
    }

    /// Returns `true` for [`Input::Bytes`].
    pub fn is_canonical_bytes(&self) -> bool {
        matches!(self, Input::Bytes(_))
    }

    /// Appends this input's canonical bytes to `buffer`.
    pub fn write_canonical(&self, buffer: &mut ByteString) {
        match self {
            Input::Bytes(bytes) => buffer.append(bytes),
            Input::Integer(magnitude) => buffer.append(encode_integer(magnitude)),
            Input::Text(content) => buffer.append(content.as_bytes()),
            Input::Hex(hex) => buffer.append(hex.as_bytes()),
            Input::Absent => buffer.append(encode_absent()),
        }
    }

    /// Canonical bytes of this input alone.
    pub fn canonical_bytes(&self) -> ByteString {
        let mut buffer = ByteString::new();
        self.write_canonical(&mut buffer);
        buffer
    }
}

macro_rules! input_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Integer(BigUint::from(value))
                }
            }
        )*
    };
}

input_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for Input {
    fn from(value: BigUint) -> Self {
        Input::Integer(value)
    }
}

impl From<&BigUint> for Input {
    fn from(value: &BigUint) -> Self {
        Input::Integer(value.clone())
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<HexString> for Input {
    fn from(value: HexString) -> Self {
        Input::Hex(value)
    }
}

impl From<ByteString> for Input {
    fn from(value: ByteString) -> Self {
        Input::Bytes(value)
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value.into())
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.into())
    }
}

impl From<Digest> for Input {
    fn from(value: Digest) -> Self {
        Input::Bytes(value.to_byte_string())
    }
}

impl From<&Digest> for Input {
    fn from(value: &Digest) -> Self {
        Input::Bytes(value.to_byte_string())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Absent, Into::into)
    }
}

fn parse_decimal(digits: &str) -> Result<BigUint, InputError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidInteger(digits.to_string()));
    }
    BigUint::from_str(digits).map_err(|_| InputError::InvalidInteger(digits.to_string()))
}

/// Tagged text form: `int:<decimal>`, `text:<utf8>`, `hex:<digits>`,
/// `bytes:<digits>` or `null`.
impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "null" {
            return Ok(Input::Absent);
        }
        let Some((tag, body)) = s.split_once(':') else {
            return Err(InputError::Unsupported(format!("untagged value '{}'", s)));
        };
        match tag {
            "int" => parse_decimal(body).map(Input::Integer),
            "text" => Ok(Input::Text(body.to_string())),
            "hex" => Ok(Input::Hex(HexString::parse(body)?)),
            "bytes" => Ok(Input::Bytes(hex_to_bytes(body)?)),
            other => Err(InputError::Unsupported(format!("unknown tag '{}'", other))),
        }
    }
}

/// Maps JSON scalars onto inputs: `null` → `Absent`, non-negative integers →
/// `Integer`, strings → `Text`. Everything else is rejected.
impl TryFrom<&Value> for Input {
    type Error = InputError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Input::Absent),
            Value::String(s) => Ok(Input::Text(s.clone())),
            Value::Number(n) => match n.as_u64() {
                Some(v) => Ok(Input::from(v)),
                None => Err(InputError::Unsupported(format!(
                    "number {} is not an unsigned integer",
                    n
                ))),
            },
            Value::Bool(b) => Err(InputError::Unsupported(format!("boolean {}", b))),
            Value::Array(_) => Err(InputError::Unsupported("array".to_string())),
            Value::Object(_) => Err(InputError::Unsupported("object".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_encoding_is_minimal_big_endian() {
        assert_eq!(encode_integer(&BigUint::from(0u8)).as_bytes(), &[0x00]);
        assert_eq!(encode_integer(&BigUint::from(1u8)).as_bytes(), &[0x01]);
        assert_eq!(encode_integer(&BigUint::from(0xabcu32)).as_bytes(), &[0x0a, 0xbc]);
        assert_eq!(encode_integer(&BigUint::from(256u32)).as_bytes(), &[0x01, 0x00]);
    }

    #[test]
    fn integer_encoding_round_trips_value() {
        for n in [1u128, 15, 16, 255, 256, 65_535, 1 << 64, u128::MAX] {
            let magnitude = BigUint::from(n);
            let bytes = encode_integer(&magnitude);
            assert_eq!(bytes.first().copied().map(|b| b != 0), Some(true));
            assert_eq!(BigUint::from_bytes_be(&bytes), magnitude);
        }
    }

    #[test]
    fn absent_matches_zero() {
        assert_eq!(encode_absent(), encode_integer(&BigUint::from(0u8)));
        assert_eq!(Input::Absent.canonical_bytes(), Input::from(0u64).canonical_bytes());
        assert_eq!(Input::from(None::<u64>), Input::Absent);
    }

    #[test]
    fn empty_text_contributes_no_bytes() {
        assert!(encode_text("").is_empty());
        assert!(Input::text("").canonical_bytes().is_empty());
    }

    #[test]
    fn raw_bytes_pass_through() {
        let input = Input::from(vec![0x00, 0xff]);
        assert!(is_canonical_byte_string(&input));
        assert!(!is_canonical_byte_string(&Input::text("ab")));
        assert_eq!(input.canonical_bytes().as_bytes(), &[0x00, 0xff]);
    }

    #[test]
    fn tagged_text_form() {
        assert_eq!("null".parse::<Input>().unwrap(), Input::Absent);
        assert_eq!("int:42".parse::<Input>().unwrap(), Input::from(42u8));
        assert_eq!("text:".parse::<Input>().unwrap(), Input::text(""));
        assert_eq!("text:a:b".parse::<Input>().unwrap(), Input::text("a:b"));
        assert_eq!(
            "hex:AB".parse::<Input>().unwrap().canonical_bytes(),
            "bytes:ab".parse::<Input>().unwrap().canonical_bytes()
        );
    }

    #[test]
    fn tagged_text_form_rejects_bad_values() {
        assert!(matches!(
            "int:-1".parse::<Input>(),
            Err(InputError::InvalidInteger(_))
        ));
        assert!(matches!(
            "int:1_000".parse::<Input>(),
            Err(InputError::InvalidInteger(_))
        ));
        assert!(matches!(
            "float:1.5".parse::<Input>(),
            Err(InputError::Unsupported(_))
        ));
        assert!(matches!(
            "abc".parse::<Input>(),
            Err(InputError::Unsupported(_))
        ));
        assert!(matches!(
            "hex:xyz".parse::<Input>(),
            Err(InputError::Encoding(EncodingError::InvalidHex { .. }))
        ));
    }

    #[test]
    fn json_scalars_map_to_inputs() {
        assert_eq!(Input::try_from(&json!(null)).unwrap(), Input::Absent);
        assert_eq!(Input::try_from(&json!(7)).unwrap(), Input::from(7u8));
        assert_eq!(Input::try_from(&json!("x")).unwrap(), Input::text("x"));
        for bad in [json!(-1), json!(1.5), json!(true), json!([1]), json!({"a": 1})] {
            assert!(matches!(
                Input::try_from(&bad),
                Err(InputError::Unsupported(_))
            ));
        }
    }
}

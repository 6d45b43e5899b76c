//! Decoding resolved strings into native field values

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::descriptor::FieldKind;
use crate::error::DecodeError;

// Standard alphabet with required padding; non-zero trailing bits in the
// last symbol are tolerated.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// A decoded field value, one variant per supported [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
}

/// Decode `raw` according to `kind`.
///
/// The whole string must be consumed; no trimming is done. Returns `None` for
/// [`FieldKind::Unsupported`], which has no decoding rule.
pub fn decode(kind: FieldKind, raw: &str) -> Option<Result<Value, DecodeError>> {
    let value = match kind {
        FieldKind::Bool => parse_bool(raw).map(Value::Bool),
        FieldKind::I8 => parse_int(raw).map(Value::I8),
        FieldKind::I16 => parse_int(raw).map(Value::I16),
        FieldKind::I32 => parse_int(raw).map(Value::I32),
        FieldKind::I64 => parse_int(raw).map(Value::I64),
        FieldKind::Isize => parse_int(raw).map(Value::Isize),
        FieldKind::U8 => parse_uint(raw).map(Value::U8),
        FieldKind::U16 => parse_uint(raw).map(Value::U16),
        FieldKind::U32 => parse_uint(raw).map(Value::U32),
        FieldKind::U64 => parse_uint(raw).map(Value::U64),
        FieldKind::Usize => parse_uint(raw).map(Value::Usize),
        FieldKind::F32 => parse_f32(raw).map(Value::F32),
        FieldKind::F64 => parse_f64(raw).map(Value::F64),
        FieldKind::String => Ok(Value::String(raw.to_owned())),
        FieldKind::Bytes => BASE64
            .decode(raw)
            .map(Value::Bytes)
            .map_err(DecodeError::from),
        FieldKind::Unsupported(_) => return None,
    };
    Some(value)
}

fn parse_bool(raw: &str) -> Result<bool, DecodeError> {
    const TRUE: [&str; 3] = ["true", "t", "1"];
    const FALSE: [&str; 3] = ["false", "f", "0"];

    if TRUE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(true)
    } else if FALSE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Ok(false)
    } else {
        Err(DecodeError::InvalidBool {
            value: raw.to_owned(),
        })
    }
}

fn parse_int<T>(raw: &str) -> Result<T, DecodeError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    Ok(raw.parse::<T>()?)
}

fn parse_uint<T>(raw: &str) -> Result<T, DecodeError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    if raw.starts_with('+') {
        return Err(DecodeError::UnexpectedSign {
            value: raw.to_owned(),
        });
    }
    parse_int(raw)
}

// `str::parse` saturates out-of-range floats to infinity; a finite literal
// that does so is reported as overflow.
fn parse_f32(raw: &str) -> Result<f32, DecodeError> {
    let value = raw.parse::<f32>()?;
    check_float_range(raw, value.is_infinite(), 32)?;
    Ok(value)
}

fn parse_f64(raw: &str) -> Result<f64, DecodeError> {
    let value = raw.parse::<f64>()?;
    check_float_range(raw, value.is_infinite(), 64)?;
    Ok(value)
}

fn check_float_range(raw: &str, infinite: bool, bits: u32) -> Result<(), DecodeError> {
    let literal = raw.trim_start_matches(['+', '-']);
    let spelled_infinite =
        literal.eq_ignore_ascii_case("inf") || literal.eq_ignore_ascii_case("infinity");
    if infinite && !spelled_infinite {
        return Err(DecodeError::FloatOverflow {
            value: raw.to_owned(),
            bits,
        });
    }
    Ok(())
}

/// Conversion from a decoded [`Value`] back into a native field type.
///
/// Used by the `assign` method generated by `#[derive(EnvBind)]`.
pub trait FromValue: Sized {
    const KIND: FieldKind;

    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const KIND: FieldKind = FieldKind::$variant;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

from_value! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::IntErrorKind;

    fn ok(kind: FieldKind, raw: &str) -> Value {
        decode(kind, raw).unwrap().unwrap()
    }

    fn err(kind: FieldKind, raw: &str) -> DecodeError {
        decode(kind, raw).unwrap().unwrap_err()
    }

    #[test]
    fn test_bool_literals() {
        for raw in ["true", "TRUE", "True", "t", "T", "1"] {
            assert_eq!(ok(FieldKind::Bool, raw), Value::Bool(true), "{raw}");
        }
        for raw in ["false", "FALSE", "f", "F", "0"] {
            assert_eq!(ok(FieldKind::Bool, raw), Value::Bool(false), "{raw}");
        }
    }

    #[test]
    fn test_bool_rejects_other_text() {
        for raw in ["yes", "no", "2", " true", "true "] {
            assert!(
                matches!(err(FieldKind::Bool, raw), DecodeError::InvalidBool { .. }),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_signed_width_is_enforced() {
        assert_eq!(ok(FieldKind::I8, "-128"), Value::I8(-128));
        assert_eq!(ok(FieldKind::I64, "+42"), Value::I64(42));

        match err(FieldKind::I8, "999999") {
            DecodeError::Int(e) => assert_eq!(e.kind(), &IntErrorKind::PosOverflow),
            other => panic!("unexpected error: {other:?}"),
        }
        match err(FieldKind::I16, "-40000") {
            DecodeError::Int(e) => assert_eq!(e.kind(), &IntErrorKind::NegOverflow),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unsigned_rejects_negative_and_overflow() {
        assert_eq!(ok(FieldKind::U16, "65535"), Value::U16(65535));
        assert!(matches!(err(FieldKind::U16, "65536"), DecodeError::Int(_)));
        assert!(matches!(err(FieldKind::U32, "-1"), DecodeError::Int(_)));
    }

    #[test]
    fn test_unsigned_rejects_plus_sign() {
        assert!(matches!(
            err(FieldKind::U32, "+5"),
            DecodeError::UnexpectedSign { .. }
        ));
        assert!(matches!(
            err(FieldKind::Usize, "+0"),
            DecodeError::UnexpectedSign { .. }
        ));
    }

    #[test]
    fn test_integer_rejects_trailing_garbage() {
        assert!(matches!(err(FieldKind::I32, "10px"), DecodeError::Int(_)));
        assert!(matches!(err(FieldKind::I32, " 10"), DecodeError::Int(_)));
        assert!(matches!(err(FieldKind::U64, "0x10"), DecodeError::Int(_)));
    }

    #[test]
    fn test_floats() {
        assert_eq!(ok(FieldKind::F32, "2.5"), Value::F32(2.5));
        assert_eq!(ok(FieldKind::F64, "1e-3"), Value::F64(0.001));
        assert_eq!(ok(FieldKind::F64, "-inf"), Value::F64(f64::NEG_INFINITY));
        assert!(matches!(err(FieldKind::F64, "1.0.0"), DecodeError::Float(_)));

        for raw in ["nan", "NaN"] {
            match ok(FieldKind::F64, raw) {
                Value::F64(v) => assert!(v.is_nan(), "{raw}"),
                other => panic!("unexpected value: {other:?}"),
            }
        }
        match ok(FieldKind::F32, "nan") {
            Value::F32(v) => assert!(v.is_nan()),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_float_overflow_at_declared_width() {
        assert!(matches!(
            err(FieldKind::F32, "1e50"),
            DecodeError::FloatOverflow { bits: 32, .. }
        ));
        assert_eq!(ok(FieldKind::F64, "1e50"), Value::F64(1e50));
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(
            ok(FieldKind::String, "  spaced, = out  "),
            Value::String("  spaced, = out  ".to_string())
        );
    }

    #[test]
    fn test_bytes_from_base64() {
        assert_eq!(
            ok(FieldKind::Bytes, "aGVsbG8gd29ybGQ="),
            Value::Bytes(b"hello world".to_vec())
        );
        assert!(matches!(err(FieldKind::Bytes, "not base64!"), DecodeError::Base64(_)));
        assert!(matches!(err(FieldKind::Bytes, "aGVsbG8gd29ybGQ"), DecodeError::Base64(_)));
    }

    #[test]
    fn test_bytes_tolerate_trailing_bits() {
        assert_eq!(ok(FieldKind::Bytes, "aGl="), Value::Bytes(b"hi".to_vec()));
        assert_eq!(ok(FieldKind::Bytes, "aGk="), Value::Bytes(b"hi".to_vec()));
    }

    #[test]
    fn test_unsupported_has_no_rule() {
        assert!(decode(FieldKind::Unsupported("Vec<String>"), "a,b").is_none());
    }

    #[test]
    fn test_from_value_checks_variant() {
        assert_eq!(u8::from_value(Value::U8(7)), Some(7));
        assert_eq!(u8::from_value(Value::I8(7)), None);
        assert_eq!(<Vec<u8>>::KIND, FieldKind::Bytes);
    }
}

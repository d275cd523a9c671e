// Copyright (C) 2015-2025 The Neo Project.
//
// numeric.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Numeric values as callers hand them to the converter.

use crate::error::{ConverterError, ConverterResult};
use crate::hex_codec::IntegerHexCodec;
use icon_json::JToken;
use num_bigint::{BigInt, BigUint};
use num_traits::FromPrimitive;
use std::fmt;

/// A number in one of the representations an SDK caller may hold.
///
/// Coercion to an integer is fail-fast: fractions, non-finite floats and
/// strings that are not integer literals are rejected rather than rounded.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Integer(BigInt),
    Float(f64),
    /// Decimal (`"100000"`, `"-3"`) or `0x`-hex (`"0x186a0"`) integer literal.
    Text(String),
}

impl NumericValue {
    /// Coerces the value to an arbitrary-precision integer.
    pub fn to_big_int(&self) -> ConverterResult<BigInt> {
        match self {
            NumericValue::Integer(value) => Ok(value.clone()),
            NumericValue::Float(value) => float_to_big_int(*value),
            NumericValue::Text(text) => text_to_big_int(text),
        }
    }

    /// Canonical hex encoding of the value. Negative values are rejected.
    pub fn to_hex(&self) -> ConverterResult<String> {
        IntegerHexCodec::encode(&self.to_big_int()?)
    }
}

fn float_to_big_int(value: f64) -> ConverterResult<BigInt> {
    if !value.is_finite() {
        return Err(ConverterError::invalid_numeric(value, "not a finite number"));
    }
    if value.fract() != 0.0 {
        return Err(ConverterError::invalid_numeric(value, "non-integral value"));
    }
    BigInt::from_f64(value)
        .ok_or_else(|| ConverterError::invalid_numeric(value, "not representable as an integer"))
}

fn text_to_big_int(text: &str) -> ConverterResult<BigInt> {
    if text.starts_with("0x") || text.starts_with("0X") {
        return IntegerHexCodec::decode(text);
    }

    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return Err(ConverterError::invalid_numeric(text, "empty numeric string"));
    }
    if digits.contains('.') {
        return Err(ConverterError::invalid_numeric(text, "non-integral value"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConverterError::invalid_numeric(text, "not an integer literal"));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| ConverterError::invalid_numeric(text, "not an integer literal"))?;
    Ok(if digits.len() == text.len() {
        magnitude
    } else {
        -magnitude
    })
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(value) => write!(f, "{value}"),
            NumericValue::Float(value) => write!(f, "{value}"),
            NumericValue::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for NumericValue {
                fn from(value: $ty) -> Self {
                    NumericValue::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<BigInt> for NumericValue {
    fn from(value: BigInt) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<&BigInt> for NumericValue {
    fn from(value: &BigInt) -> Self {
        NumericValue::Integer(value.clone())
    }
}

impl From<BigUint> for NumericValue {
    fn from(value: BigUint) -> Self {
        NumericValue::Integer(BigInt::from(value))
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Float(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        NumericValue::Text(value)
    }
}

impl TryFrom<&JToken> for NumericValue {
    type Error = ConverterError;

    fn try_from(token: &JToken) -> Result<Self, Self::Error> {
        match token {
            JToken::Number(n) => {
                if let Some(value) = n.as_u64() {
                    Ok(NumericValue::from(value))
                } else if let Some(value) = n.as_i64() {
                    Ok(NumericValue::from(value))
                } else if let Some(value) = wide_integer(&n.to_string()) {
                    Ok(NumericValue::Integer(value))
                } else {
                    n.as_f64()
                        .map(NumericValue::Float)
                        .ok_or_else(|| ConverterError::invalid_numeric(n, "unsupported number"))
                }
            }
            JToken::String(text) => Ok(NumericValue::Text(text.clone())),
            other => Err(ConverterError::invalid_numeric(
                other,
                format!("unsupported representation: {}", other.type_name()),
            )),
        }
    }
}

/// Integer literal wider than 64 bits, kept exact.
fn wide_integer(literal: &str) -> Option<BigInt> {
    let digits = literal.strip_prefix('-').unwrap_or(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(literal.as_bytes(), 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use icon_json::{JArray, JObject};

    #[test]
    fn integer_representations_agree() {
        let expected = BigInt::from(100_000);
        for value in [
            NumericValue::from(100_000u32),
            NumericValue::from(100_000i64),
            NumericValue::from(100_000.0f64),
            NumericValue::from("100000"),
            NumericValue::from("0x186a0"),
        ] {
            assert_eq!(value.to_big_int().unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn negative_text_parses_but_does_not_encode() {
        let value = NumericValue::from("-3");
        assert_eq!(value.to_big_int().unwrap(), BigInt::from(-3));
        assert_eq!(
            value.to_hex().unwrap_err().kind(),
            ErrorKind::InvalidNumericInput
        );
    }

    #[test]
    fn fractional_and_garbage_inputs_fail_fast() {
        for value in [
            NumericValue::from(1.5f64),
            NumericValue::from(f64::NAN),
            NumericValue::from(f64::INFINITY),
            NumericValue::from("1.5"),
            NumericValue::from("1e3"),
            NumericValue::from(" 7"),
            NumericValue::from(""),
            NumericValue::from("-"),
            NumericValue::from("abc"),
        ] {
            let err = value.to_big_int().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNumericInput, "{value}");
        }
    }

    #[test]
    fn from_json_token() {
        let number = NumericValue::try_from(&JToken::from(1544596599371000u64)).unwrap();
        assert_eq!(number.to_hex().unwrap(), "0x57ccd6ba074f8");

        let text = NumericValue::try_from(&JToken::from("0x3")).unwrap();
        assert_eq!(text.to_hex().unwrap(), "0x3");

        let wide: JToken = "12345678901234567890123".parse().unwrap();
        let number = NumericValue::try_from(&wide).unwrap();
        assert!(matches!(number, NumericValue::Integer(_)));
        assert_eq!(number.to_hex().unwrap(), "0x29d42b64e76714244cb");

        for token in [
            JToken::Boolean(true),
            JToken::Null,
            JToken::from(JArray::new()),
            JToken::from(JObject::new()),
        ] {
            let err = NumericValue::try_from(&token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNumericInput, "{token}");
        }
    }
}

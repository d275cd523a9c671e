// Copyright (C) 2015-2025 The Neo Project.
//
// converter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Value conversion helpers used when assembling transactions.

use crate::error::ConverterResult;
use crate::hex_codec::IntegerHexCodec;
use crate::numeric::NumericValue;
use crate::transaction::{self, RawTransaction, TransactionRequest};
use num_bigint::{BigInt, BigUint};

/// Values with a `0x` hex rendering.
///
/// Numbers use the canonical integer encoding. Strings that already are
/// `0x` hex are returned unchanged; any other string is encoded byte-wise as
/// UTF-8.
pub trait HexEncode {
    fn to_hex_string(&self) -> ConverterResult<String>;
}

impl HexEncode for str {
    fn to_hex_string(&self) -> ConverterResult<String> {
        if Converter::is_hex(self) {
            Ok(self.to_string())
        } else {
            Ok(Converter::from_utf8(self))
        }
    }
}

impl HexEncode for String {
    fn to_hex_string(&self) -> ConverterResult<String> {
        self.as_str().to_hex_string()
    }
}

impl HexEncode for NumericValue {
    fn to_hex_string(&self) -> ConverterResult<String> {
        self.to_hex()
    }
}

impl HexEncode for BigInt {
    fn to_hex_string(&self) -> ConverterResult<String> {
        IntegerHexCodec::encode(self)
    }
}

impl HexEncode for BigUint {
    fn to_hex_string(&self) -> ConverterResult<String> {
        Ok(IntegerHexCodec::encode_unsigned(self))
    }
}

impl HexEncode for f64 {
    fn to_hex_string(&self) -> ConverterResult<String> {
        NumericValue::Float(*self).to_hex()
    }
}

macro_rules! impl_hex_encode_integer {
    ($($ty:ty),*) => {
        $(
            impl HexEncode for $ty {
                fn to_hex_string(&self) -> ConverterResult<String> {
                    IntegerHexCodec::encode(&BigInt::from(*self))
                }
            }
        )*
    };
}

impl_hex_encode_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T: HexEncode + ?Sized> HexEncode for &T {
    fn to_hex_string(&self) -> ConverterResult<String> {
        (**self).to_hex_string()
    }
}

/// Stateless conversion helpers.
pub struct Converter;

impl Converter {
    /// Coerces an integer, float, decimal string or `0x` hex string.
    pub fn to_big_int(value: impl Into<NumericValue>) -> ConverterResult<BigInt> {
        value.into().to_big_int()
    }

    /// Hex rendering of `value`, see [`HexEncode`].
    pub fn to_hex(value: impl HexEncode) -> ConverterResult<String> {
        value.to_hex_string()
    }

    /// `0x` followed by the lowercase hex of the UTF-8 bytes of `text`.
    pub fn from_utf8(text: &str) -> String {
        format!("0x{}", hex::encode(text.as_bytes()))
    }

    /// Decodes hex produced by [`from_utf8`](Self::from_utf8). The prefix is optional.
    pub fn to_utf8(hex_text: &str) -> ConverterResult<String> {
        let body = hex_text
            .strip_prefix("0x")
            .or_else(|| hex_text.strip_prefix("0X"))
            .unwrap_or(hex_text);
        let bytes = hex::decode(body)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// True for `0x` followed by at least one hex digit, in either case.
    pub fn is_hex(text: &str) -> bool {
        match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(body) => !body.is_empty() && body.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }

    pub fn to_raw_transaction(request: &TransactionRequest) -> ConverterResult<RawTransaction> {
        transaction::to_raw_transaction(request)
    }
}

// Copyright (C) 2015-2025 The Neo Project.
//
// hex_codec.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ConverterError, ConverterResult};
use num_bigint::{BigInt, BigUint, Sign};

/// Canonical integer hex codec.
///
/// Encodes non-negative integers of any magnitude as `0x` followed by
/// lowercase hex digits with no leading zeros. Zero encodes as `0x0`.
pub struct IntegerHexCodec;

impl IntegerHexCodec {
    /// Encodes a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNumericInput` when `value` is negative.
    pub fn encode(value: &BigInt) -> ConverterResult<String> {
        if value.sign() == Sign::Minus {
            return Err(ConverterError::invalid_numeric(
                value,
                "negative values have no canonical hex encoding",
            ));
        }
        Ok(Self::encode_unsigned(value.magnitude()))
    }

    /// Encodes an unsigned integer. Infallible.
    pub fn encode_unsigned(value: &BigUint) -> String {
        format!("0x{value:x}")
    }

    /// Decodes a `0x`-prefixed hex quantity.
    ///
    /// Leading zeros in the body are accepted; the prefix is mandatory.
    pub fn decode(text: &str) -> ConverterResult<BigInt> {
        let body = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .ok_or_else(|| ConverterError::invalid_numeric(text, "missing 0x prefix"))?;

        if body.is_empty() {
            return Err(ConverterError::invalid_numeric(text, "empty hex quantity"));
        }
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConverterError::invalid_numeric(text, "non-hex digit"));
        }

        BigUint::parse_bytes(body.as_bytes(), 16)
            .map(BigInt::from)
            .ok_or_else(|| ConverterError::invalid_numeric(text, "non-hex digit"))
    }

    /// Checks whether `text` is a canonical encoding as produced by [`encode`](Self::encode).
    pub fn is_canonical(text: &str) -> bool {
        match text.strip_prefix("0x") {
            Some("0") => true,
            Some(body) => {
                !body.is_empty()
                    && !body.starts_with('0')
                    && body.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use num_traits::Zero;

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn zero_is_0x0() {
        assert_eq!(IntegerHexCodec::encode(&BigInt::zero()).unwrap(), "0x0");
        assert_eq!(IntegerHexCodec::encode_unsigned(&BigUint::zero()), "0x0");
    }

    #[test]
    fn envelope_values_from_fixtures() {
        assert_eq!(IntegerHexCodec::encode(&big("100000")).unwrap(), "0x186a0");
        assert_eq!(IntegerHexCodec::encode(&big("2500000")).unwrap(), "0x2625a0");
        assert_eq!(
            IntegerHexCodec::encode(&big("1544596599371000")).unwrap(),
            "0x57ccd6ba074f8"
        );
    }

    #[test]
    fn values_beyond_64_bits() {
        // 5000 ICX in loop
        let value = big("5000000000000000000000");
        assert_eq!(
            IntegerHexCodec::encode(&value).unwrap(),
            "0x10f0cf064dd59200000"
        );
        assert_eq!(
            IntegerHexCodec::encode(&BigInt::from(u128::MAX)).unwrap(),
            "0xffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = IntegerHexCodec::encode(&BigInt::from(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumericInput);
    }

    #[test]
    fn decode_accepts_prefix_variants_and_leading_zeros() {
        assert_eq!(IntegerHexCodec::decode("0x186a0").unwrap(), big("100000"));
        assert_eq!(IntegerHexCodec::decode("0X186A0").unwrap(), big("100000"));
        assert_eq!(IntegerHexCodec::decode("0x000f").unwrap(), big("15"));
    }

    #[test]
    fn decode_rejects_malformed_input() {
        for text in ["186a0", "0x", "0xg1", "0x1_000", "0x+1", ""] {
            let err = IntegerHexCodec::decode(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidNumericInput, "{text}");
        }
    }

    #[test]
    fn canonical_form_check() {
        assert!(IntegerHexCodec::is_canonical("0x0"));
        assert!(IntegerHexCodec::is_canonical("0x10f0cf064dd59200000"));
        assert!(!IntegerHexCodec::is_canonical("0x00"));
        assert!(!IntegerHexCodec::is_canonical("0x0a"));
        assert!(!IntegerHexCodec::is_canonical("0xA"));
        assert!(!IntegerHexCodec::is_canonical("0x"));
        assert!(!IntegerHexCodec::is_canonical("10"));
    }
}

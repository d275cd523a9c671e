// Copyright (C) 2015-2025 The Neo Project.
//
// amount.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! ICX amounts and unit conversion.

use crate::error::{ConverterError, ConverterResult};
use icon_config::ICX_DECIMALS;
use num_bigint::{BigInt, Sign};
use num_traits::{pow, Zero};
use std::fmt;
use std::str::FromStr;

/// Denomination of an amount, identified by its number of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Loop,
    Icx,
}

impl Unit {
    pub fn digits(&self) -> u32 {
        match self {
            Unit::Loop => 0,
            Unit::Icx => ICX_DECIMALS,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Loop => write!(f, "loop"),
            Unit::Icx => write!(f, "ICX"),
        }
    }
}

impl FromStr for Unit {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "loop" => Ok(Unit::Loop),
            "icx" => Ok(Unit::Icx),
            _ => Err(ConverterError::InvalidAmount(format!("unknown unit: {s}"))),
        }
    }
}

/// An exact decimal amount in a given unit.
///
/// The value is `mantissa / 10^scale` units; `scale` is kept minimal so that
/// equal amounts compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAmount {
    mantissa: BigInt,
    scale: u32,
    unit: Unit,
}

fn ten_pow(exp: u32) -> BigInt {
    pow(BigInt::from(10u8), exp as usize)
}

impl IconAmount {
    /// Creates a whole-number amount.
    pub fn of(value: impl Into<BigInt>, unit: Unit) -> Self {
        Self {
            mantissa: value.into(),
            scale: 0,
            unit,
        }
        .normalized()
    }

    /// Parses a non-negative decimal amount such as `"0.5"` or `"5000"`.
    pub fn parse(text: &str, unit: Unit) -> ConverterResult<Self> {
        let invalid = || ConverterError::InvalidAmount(format!("not a decimal amount: '{text}'"));

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let digits = format!("{whole}{fraction}");
        let mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;

        Ok(Self {
            mantissa,
            scale,
            unit,
        }
        .normalized())
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Converts to the smallest unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for negative amounts and for amounts finer
    /// than one loop.
    pub fn to_loop(&self) -> ConverterResult<BigInt> {
        if self.mantissa.sign() == Sign::Minus {
            return Err(ConverterError::InvalidAmount(format!(
                "negative amount: {self}"
            )));
        }

        let digits = self.unit.digits();
        if digits >= self.scale {
            return Ok(&self.mantissa * ten_pow(digits - self.scale));
        }

        let divisor = ten_pow(self.scale - digits);
        if !(&self.mantissa % &divisor).is_zero() {
            return Err(ConverterError::InvalidAmount(format!(
                "{self} is not a whole number of loop"
            )));
        }
        Ok(&self.mantissa / divisor)
    }

    /// Expresses the same amount in another unit.
    pub fn convert_unit(&self, unit: Unit) -> IconAmount {
        let from = self.unit.digits();
        let to = unit.digits();
        let (mantissa, scale) = if self.scale + to >= from {
            (self.mantissa.clone(), self.scale + to - from)
        } else {
            (&self.mantissa * ten_pow(from - self.scale - to), 0)
        };

        Self {
            mantissa,
            scale,
            unit,
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        let ten = BigInt::from(10u8);
        while self.scale > 0 && (&self.mantissa % &ten).is_zero() {
            self.mantissa /= &ten;
            self.scale -= 1;
        }
        self
    }
}

impl fmt::Display for IconAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.mantissa.sign() == Sign::Minus { "-" } else { "" };
        let digits = self.mantissa.magnitude().to_string();
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Error types for transaction conversion.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

/// Coarse classification of a [`ConverterError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value could not be represented as a non-negative integer.
    InvalidNumericInput,
    /// An amount could not be expressed in the requested unit.
    InvalidAmount,
    /// A field held a value of the wrong JSON type, or an unknown tag.
    InvalidField,
    /// Hex or UTF-8 decoding failed.
    Encoding,
}

/// Conversion errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConverterError {
    /// The value is negative, non-integral, non-finite or not a number at all.
    #[error("Invalid numeric input '{value}': {reason}")]
    InvalidNumericInput { value: String, reason: String },

    /// A transaction field could not be converted.
    #[error("Invalid value for field '{field}': {source}")]
    InvalidField {
        field: String,
        #[source]
        source: Box<ConverterError>,
    },

    /// A field held a JSON value of an unexpected type.
    #[error("Expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// Amount conversion failed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown `dataType` tag.
    #[error("Unknown data type: {0}")]
    InvalidDataType(String),

    /// Hexadecimal decoding error.
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decoded bytes were not UTF-8.
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl ConverterError {
    /// Helper for creating an invalid numeric input error.
    pub fn invalid_numeric(value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Attaches the name of the transaction field that failed.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Classifies the error. Field errors report the kind of their cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNumericInput { .. } => ErrorKind::InvalidNumericInput,
            Self::InvalidField { source, .. } => source.kind(),
            Self::UnexpectedType { .. } | Self::InvalidDataType(_) => ErrorKind::InvalidField,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::Hex(_) | Self::Utf8(_) => ErrorKind::Encoding,
        }
    }

    /// Name of the field that failed, if the error was raised for one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_keep_the_kind_of_their_cause() {
        let err = ConverterError::invalid_numeric("-1", "negative").in_field("value");
        assert_eq!(err.kind(), ErrorKind::InvalidNumericInput);
        assert_eq!(err.field(), Some("value"));
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'value': Invalid numeric input '-1': negative"
        );
    }

    #[test]
    fn decoding_errors_are_encoding_kind() {
        let err = ConverterError::from(hex::FromHexError::OddLength);
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(err.field(), None);
    }
}

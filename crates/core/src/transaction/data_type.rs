// Copyright (C) 2015-2025 The Neo Project.
//
// data_type.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::ConverterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of payload carried in a transaction's `data` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Score method invocation: `{ method, params? }`.
    Call,
    /// Score installation or update: `{ contentType, content, params? }`.
    Deploy,
    /// Arbitrary hex-encoded message.
    Message,
    /// Fee deposit management: `{ action, id?, amount? }`.
    Deposit,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Call => "call",
            DataType::Deploy => "deploy",
            DataType::Message => "message",
            DataType::Deposit => "deposit",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(DataType::Call),
            "deploy" => Ok(DataType::Deploy),
            "message" => Ok(DataType::Message),
            "deposit" => Ok(DataType::Deposit),
            _ => Err(ConverterError::InvalidDataType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for data_type in [
            DataType::Call,
            DataType::Deploy,
            DataType::Message,
            DataType::Deposit,
        ] {
            assert_eq!(data_type.as_str().parse::<DataType>().unwrap(), data_type);
            assert_eq!(
                serde_json::to_string(&data_type).unwrap(),
                format!("\"{}\"", data_type.as_str())
            );
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!(matches!(
            "Call".parse::<DataType>(),
            Err(ConverterError::InvalidDataType(tag)) if tag == "Call"
        ));
    }
}

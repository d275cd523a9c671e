// Copyright (C) 2015-2025 The Neo Project.
//
// envelope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The fixed set of top-level transaction fields and how each one is put on
//! the wire.

/// Wire treatment of an envelope field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEncoding {
    /// Copied structurally.
    PassThrough,
    /// Encoded as a canonical `0x` hex quantity.
    Hex,
}

/// Top-level transaction field known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeField {
    From,
    To,
    Value,
    StepLimit,
    Nid,
    Nonce,
    Version,
    Timestamp,
    DataType,
    Data,
}

impl EnvelopeField {
    /// Every envelope field, in wire emission order.
    pub const ALL: [EnvelopeField; 10] = [
        EnvelopeField::From,
        EnvelopeField::To,
        EnvelopeField::Value,
        EnvelopeField::StepLimit,
        EnvelopeField::Nid,
        EnvelopeField::Nonce,
        EnvelopeField::Version,
        EnvelopeField::Timestamp,
        EnvelopeField::DataType,
        EnvelopeField::Data,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            EnvelopeField::From => "from",
            EnvelopeField::To => "to",
            EnvelopeField::Value => "value",
            EnvelopeField::StepLimit => "stepLimit",
            EnvelopeField::Nid => "nid",
            EnvelopeField::Nonce => "nonce",
            EnvelopeField::Version => "version",
            EnvelopeField::Timestamp => "timestamp",
            EnvelopeField::DataType => "dataType",
            EnvelopeField::Data => "data",
        }
    }

    pub fn encoding(self) -> FieldEncoding {
        match self {
            EnvelopeField::Value
            | EnvelopeField::StepLimit
            | EnvelopeField::Nid
            | EnvelopeField::Nonce
            | EnvelopeField::Version
            | EnvelopeField::Timestamp => FieldEncoding::Hex,
            EnvelopeField::From
            | EnvelopeField::To
            | EnvelopeField::DataType
            | EnvelopeField::Data => FieldEncoding::PassThrough,
        }
    }

    /// Looks a field up by its exact wire name.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_six_fields_are_hex_encoded() {
        let hex: Vec<_> = EnvelopeField::ALL
            .into_iter()
            .filter(|field| field.encoding() == FieldEncoding::Hex)
            .map(EnvelopeField::wire_name)
            .collect();
        assert_eq!(
            hex,
            vec!["value", "stepLimit", "nid", "nonce", "version", "timestamp"]
        );
    }

    #[test]
    fn wire_name_lookup() {
        for field in EnvelopeField::ALL {
            assert_eq!(EnvelopeField::from_wire_name(field.wire_name()), Some(field));
        }
        assert_eq!(EnvelopeField::from_wire_name("step_limit"), None);
        assert_eq!(EnvelopeField::from_wire_name("StepLimit"), None);
        assert_eq!(EnvelopeField::from_wire_name("method"), None);
    }
}

// Copyright (C) 2015-2025 The Neo Project.
//
// request.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::data_type::DataType;
use super::envelope::EnvelopeField;
use crate::error::{ConverterError, ConverterResult};
use crate::numeric::NumericValue;
use icon_json::{JObject, JToken};

/// A transaction as built by an SDK caller, before wire encoding.
///
/// A `None` field is absent and will not appear on the wire. Fields that are
/// not part of the envelope are kept in insertion order and passed through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub value: Option<NumericValue>,
    pub step_limit: Option<NumericValue>,
    pub nid: Option<NumericValue>,
    pub nonce: Option<NumericValue>,
    pub version: Option<NumericValue>,
    pub timestamp: Option<NumericValue>,
    pub data_type: Option<DataType>,
    pub data: Option<JToken>,
    pub(crate) extra: JObject,
}

impl TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from a JSON object keyed by wire names.
    ///
    /// `null` members are treated as absent.
    pub fn from_json(object: &JObject) -> ConverterResult<Self> {
        let mut request = Self::new();
        for (name, value) in object.iter() {
            request.set_field(name, value.clone())?;
        }
        Ok(request)
    }

    /// Sets a field by wire name. Unknown names become extra fields.
    ///
    /// Setting `JToken::Null` clears the field.
    pub fn set_field(&mut self, name: &str, value: JToken) -> ConverterResult<()> {
        let Some(field) = EnvelopeField::from_wire_name(name) else {
            if value.is_null() {
                self.extra.remove(&name.to_string());
            } else {
                self.extra.insert(name.to_string(), value);
            }
            return Ok(());
        };

        if value.is_null() {
            self.clear(field);
            return Ok(());
        }

        let in_field = |err: ConverterError| err.in_field(name);
        match field {
            EnvelopeField::From => self.from = Some(address(&value).map_err(in_field)?),
            EnvelopeField::To => self.to = Some(address(&value).map_err(in_field)?),
            EnvelopeField::DataType => {
                let tag = value
                    .as_str()
                    .ok_or_else(|| unexpected("string", &value))
                    .and_then(|tag| tag.parse::<DataType>())
                    .map_err(in_field)?;
                self.data_type = Some(tag);
            }
            EnvelopeField::Data => self.data = Some(value),
            numeric => {
                let number = NumericValue::try_from(&value).map_err(in_field)?;
                if let Some(slot) = self.numeric_slot(numeric) {
                    *slot = Some(number);
                }
            }
        }
        Ok(())
    }

    /// Fields outside the envelope, in insertion order.
    pub fn extra(&self) -> &JObject {
        &self.extra
    }

    /// Numeric value of a hex-encoded envelope field, if set.
    pub fn numeric(&self, field: EnvelopeField) -> Option<&NumericValue> {
        match field {
            EnvelopeField::Value => self.value.as_ref(),
            EnvelopeField::StepLimit => self.step_limit.as_ref(),
            EnvelopeField::Nid => self.nid.as_ref(),
            EnvelopeField::Nonce => self.nonce.as_ref(),
            EnvelopeField::Version => self.version.as_ref(),
            EnvelopeField::Timestamp => self.timestamp.as_ref(),
            _ => None,
        }
    }

    /// Owned copy of a pass-through envelope field, if set.
    pub fn pass_through(&self, field: EnvelopeField) -> Option<JToken> {
        match field {
            EnvelopeField::From => self.from.clone().map(JToken::String),
            EnvelopeField::To => self.to.clone().map(JToken::String),
            EnvelopeField::DataType => self.data_type.map(|tag| JToken::from(tag.as_str())),
            EnvelopeField::Data => self.data.clone(),
            _ => None,
        }
    }

    pub fn is_set(&self, field: EnvelopeField) -> bool {
        self.numeric(field).is_some()
            || match field {
                EnvelopeField::From => self.from.is_some(),
                EnvelopeField::To => self.to.is_some(),
                EnvelopeField::DataType => self.data_type.is_some(),
                EnvelopeField::Data => self.data.is_some(),
                _ => false,
            }
    }

    /// Wire names of every defined field: envelope fields first, then extras.
    pub fn keys(&self) -> Vec<&str> {
        EnvelopeField::ALL
            .into_iter()
            .filter(|field| self.is_set(*field))
            .map(|field| field.wire_name())
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }

    fn clear(&mut self, field: EnvelopeField) {
        match field {
            EnvelopeField::From => self.from = None,
            EnvelopeField::To => self.to = None,
            EnvelopeField::DataType => self.data_type = None,
            EnvelopeField::Data => self.data = None,
            numeric => {
                if let Some(slot) = self.numeric_slot(numeric) {
                    *slot = None;
                }
            }
        }
    }

    fn numeric_slot(&mut self, field: EnvelopeField) -> Option<&mut Option<NumericValue>> {
        match field {
            EnvelopeField::Value => Some(&mut self.value),
            EnvelopeField::StepLimit => Some(&mut self.step_limit),
            EnvelopeField::Nid => Some(&mut self.nid),
            EnvelopeField::Nonce => Some(&mut self.nonce),
            EnvelopeField::Version => Some(&mut self.version),
            EnvelopeField::Timestamp => Some(&mut self.timestamp),
            _ => None,
        }
    }
}

fn address(value: &JToken) -> ConverterResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| unexpected("string", value))
}

fn unexpected(expected: &'static str, found: &JToken) -> ConverterError {
    ConverterError::UnexpectedType {
        expected,
        found: found.type_name(),
    }
}

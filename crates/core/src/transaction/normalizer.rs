// Copyright (C) 2015-2025 The Neo Project.
//
// normalizer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::envelope::{EnvelopeField, FieldEncoding};
use super::raw::RawTransaction;
use super::request::TransactionRequest;
use crate::error::ConverterResult;
use icon_json::{JObject, JToken};
use tracing::{debug, trace};

/// Converts a transaction request into its wire form.
///
/// Hex fields are encoded with the integer hex codec, every other defined
/// field is deep-copied, absent fields are left out. The `data` payload is
/// never inspected. The first field that fails to encode aborts the whole
/// conversion.
pub fn to_raw_transaction(request: &TransactionRequest) -> ConverterResult<RawTransaction> {
    let mut raw = JObject::with_capacity(EnvelopeField::ALL.len() + request.extra().len());

    for field in EnvelopeField::ALL {
        let name = field.wire_name();
        let token = match field.encoding() {
            FieldEncoding::Hex => match request.numeric(field) {
                Some(number) => {
                    let hex = number.to_hex().map_err(|err| {
                        debug!(field = name, error = %err, "envelope field rejected");
                        err.in_field(name)
                    })?;
                    trace!(field = name, %hex, "encoded envelope field");
                    JToken::String(hex)
                }
                None => continue,
            },
            FieldEncoding::PassThrough => match request.pass_through(field) {
                Some(token) => token,
                None => continue,
            },
        };
        raw.insert(name.to_string(), token);
    }

    for (name, value) in request.extra().iter() {
        raw.insert(name.clone(), value.clone());
    }

    debug!(fields = raw.len(), "normalized transaction request");
    Ok(RawTransaction::from_object(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::transaction::DataType;
    use crate::NumericValue;
    use serde_json::json;

    fn call_request() -> TransactionRequest {
        TransactionRequest {
            from: Some("hx46293d558d3bd489c3715e7e3648de0e35086bfd".to_string()),
            to: Some("cx87a90bfe8ed49e1a25184ce77fa0d9c4b0484d6a".to_string()),
            value: Some(NumericValue::from(0u32)),
            step_limit: Some(NumericValue::from(100_000u32)),
            nid: Some(NumericValue::from(3u32)),
            nonce: Some(NumericValue::from(1u32)),
            version: Some(NumericValue::from(3u32)),
            timestamp: Some(NumericValue::from(1_544_596_599_371_000u64)),
            data_type: Some(DataType::Call),
            data: Some(JToken::from(json!({
                "method": "burn",
                "params": {"account": "hx16293d558d3bd489c3715e7e3648de0e35086bfd", "amount": "0x3"}
            }))),
            ..TransactionRequest::default()
        }
    }

    #[test]
    fn encodes_only_the_numeric_envelope() {
        let raw = to_raw_transaction(&call_request()).unwrap();
        assert_eq!(
            raw.to_json_value(),
            json!({
                "from": "hx46293d558d3bd489c3715e7e3648de0e35086bfd",
                "to": "cx87a90bfe8ed49e1a25184ce77fa0d9c4b0484d6a",
                "stepLimit": "0x186a0",
                "nid": "0x3",
                "nonce": "0x1",
                "value": "0x0",
                "version": "0x3",
                "timestamp": "0x57ccd6ba074f8",
                "dataType": "call",
                "data": {
                    "method": "burn",
                    "params": {"account": "hx16293d558d3bd489c3715e7e3648de0e35086bfd", "amount": "0x3"}
                }
            })
        );
    }

    #[test]
    fn absent_fields_are_omitted() {
        let request = TransactionRequest {
            nonce: None,
            data_type: None,
            data: None,
            ..call_request()
        };
        let raw = to_raw_transaction(&request).unwrap();
        for key in ["nonce", "dataType", "data"] {
            assert!(!raw.contains_key(key), "{key} should be absent");
        }
        assert_eq!(raw.len(), 7);
    }

    #[test]
    fn numeric_looking_payload_leaves_are_untouched() {
        let mut request = call_request();
        request.data = Some(JToken::from(json!({"value": 100, "nonce": "12", "stepLimit": [1, 2]})));
        let raw = to_raw_transaction(&request).unwrap();
        assert_eq!(
            raw.get("data").unwrap().to_json_value(),
            json!({"value": 100, "nonce": "12", "stepLimit": [1, 2]})
        );
    }

    #[test]
    fn extra_fields_pass_through_after_the_envelope() {
        let mut request = call_request();
        request.set_field("signature", JToken::from("c2lnbmF0dXJl")).unwrap();
        let raw = to_raw_transaction(&request).unwrap();
        assert_eq!(raw.keys().last(), Some("signature"));
        assert_eq!(raw.get_str("signature"), Some("c2lnbmF0dXJl"));
    }

    #[test]
    fn first_bad_numeric_field_aborts_conversion() {
        let mut request = call_request();
        request.nonce = Some(NumericValue::from(-1i32));
        let err = to_raw_transaction(&request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidNumericInput);
        assert_eq!(err.field(), Some("nonce"));
    }
}

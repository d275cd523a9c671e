// Copyright (C) 2015-2025 The Neo Project.
//
// raw.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use icon_json::{JObject, JToken};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire-ready transaction: the `params` object of an `icx_sendTransaction` call.
///
/// Treat it as an unordered mapping. Serialization follows the envelope
/// order, then extra fields in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTransaction(JObject);

impl RawTransaction {
    pub(crate) fn from_object(object: JObject) -> Self {
        Self(object)
    }

    pub fn get(&self, key: &str) -> Option<&JToken> {
        self.0.get_str(key)
    }

    /// String value of a field; every hex-encoded field is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(JToken::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_str(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_object(&self) -> &JObject {
        &self.0
    }

    pub fn into_object(self) -> JObject {
        self.0
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(JToken::Object(self.0.clone()))
    }

    pub fn into_json_value(self) -> serde_json::Value {
        serde_json::Value::from(JToken::Object(self.0))
    }
}

impl From<RawTransaction> for JToken {
    fn from(raw: RawTransaction) -> Self {
        JToken::Object(raw.0)
    }
}

impl fmt::Display for RawTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

//! JToken - an opaque JSON value.
//!
//! Transaction payloads are carried as `JToken` trees: the converter copies
//! them structurally and never interprets their leaves.

use crate::error::{JsonError, JsonResult};
use crate::ordered_dictionary::OrderedDictionary;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// JSON object with insertion-ordered properties.
pub type JObject = OrderedDictionary<String, JToken>;

/// JSON array.
pub type JArray = Vec<JToken>;

/// Represents a JSON token
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JToken {
    #[default]
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    Array(JArray),
    Object(JObject),
}

impl JToken {
    pub fn from_object(object: JObject) -> Self {
        JToken::Object(object)
    }

    /// Name of the JSON type, used in cast errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            JToken::Null => "null",
            JToken::Boolean(_) => "boolean",
            JToken::Number(_) => "number",
            JToken::String(_) => "string",
            JToken::Array(_) => "array",
            JToken::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JToken::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JToken::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            JToken::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JToken::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JArray> {
        match self {
            JToken::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JObject> {
        match self {
            JToken::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Gets the child token at the specified index
    pub fn get_index(&self, index: usize) -> Option<&JToken> {
        self.as_array().and_then(|items| items.get(index))
    }

    /// Gets property by key
    pub fn get_property(&self, key: &str) -> Option<&JToken> {
        self.as_object().and_then(|obj| obj.get_str(key))
    }

    /// Gets number value
    pub fn get_number(&self) -> JsonResult<&serde_json::Number> {
        self.as_number().ok_or_else(|| self.cast_error("number"))
    }

    /// Gets string value
    pub fn get_string(&self) -> JsonResult<&str> {
        match self {
            JToken::String(s) => Ok(s),
            _ => Err(self.cast_error("string")),
        }
    }

    /// Number of direct children of an array or object.
    pub fn children_count(&self) -> usize {
        match self {
            JToken::Array(items) => items.len(),
            JToken::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    /// Parses JSON text
    pub fn parse(text: &str) -> JsonResult<JToken> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(JToken::from(value))
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.clone())
    }

    fn cast_error(&self, expected: &'static str) -> JsonError {
        JsonError::InvalidCast {
            expected,
            found: self.type_name(),
        }
    }
}

impl fmt::Display for JToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for JToken {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JToken::parse(s)
    }
}

impl Serialize for JToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JToken::Null => serializer.serialize_unit(),
            JToken::Boolean(b) => serializer.serialize_bool(*b),
            JToken::Number(n) => n.serialize(serializer),
            JToken::String(s) => serializer.serialize_str(s),
            JToken::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JToken::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(JToken::from)
    }
}

impl From<serde_json::Value> for JToken {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JToken::Null,
            serde_json::Value::Bool(b) => JToken::Boolean(b),
            serde_json::Value::Number(n) => JToken::Number(n),
            serde_json::Value::String(s) => JToken::String(s),
            serde_json::Value::Array(items) => {
                JToken::Array(items.into_iter().map(JToken::from).collect())
            }
            serde_json::Value::Object(map) => JToken::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JToken::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<JToken> for serde_json::Value {
    fn from(token: JToken) -> Self {
        match token {
            JToken::Null => serde_json::Value::Null,
            JToken::Boolean(b) => serde_json::Value::Bool(b),
            JToken::Number(n) => serde_json::Value::Number(n),
            JToken::String(s) => serde_json::Value::String(s),
            JToken::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            JToken::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for JToken {
    fn from(value: bool) -> Self {
        JToken::Boolean(value)
    }
}

impl From<&str> for JToken {
    fn from(value: &str) -> Self {
        JToken::String(value.to_string())
    }
}

impl From<String> for JToken {
    fn from(value: String) -> Self {
        JToken::String(value)
    }
}

impl From<u64> for JToken {
    fn from(value: u64) -> Self {
        JToken::Number(value.into())
    }
}

impl From<i64> for JToken {
    fn from(value: i64) -> Self {
        JToken::Number(value.into())
    }
}

impl From<u32> for JToken {
    fn from(value: u32) -> Self {
        JToken::Number(value.into())
    }
}

impl From<serde_json::Number> for JToken {
    fn from(value: serde_json::Number) -> Self {
        JToken::Number(value)
    }
}

impl From<JArray> for JToken {
    fn from(value: JArray) -> Self {
        JToken::Array(value)
    }
}

impl From<JObject> for JToken {
    fn from(value: JObject) -> Self {
        JToken::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        assert_eq!(JToken::Null.type_name(), "null");
        assert_eq!(JToken::from(true).type_name(), "boolean");
        assert_eq!(JToken::from(7u64).type_name(), "number");
        assert_eq!(JToken::from("x").type_name(), "string");
        assert_eq!(JToken::from(JArray::new()).type_name(), "array");
        assert_eq!(JToken::from(JObject::new()).type_name(), "object");
    }

    #[test]
    fn test_get_string_cast_error() {
        let err = JToken::from(1u64).get_string().unwrap_err();
        assert_eq!(
            err,
            JsonError::InvalidCast {
                expected: "string",
                found: "number"
            }
        );
    }

    #[test]
    fn test_nested_property_access() {
        let token = JToken::from(json!({
            "method": "burn",
            "params": { "account": "hx16293d558d3bd489c3715e7e3648de0e35086bfd", "amount": "0x3" }
        }));

        let amount = token
            .get_property("params")
            .and_then(|p| p.get_property("amount"))
            .and_then(JToken::as_str);
        assert_eq!(amount, Some("0x3"));
        assert_eq!(token.children_count(), 2);
    }

    #[test]
    fn test_display_is_compact_json() {
        let token = JToken::from(json!({"action": "add", "ids": [1, 2]}));
        assert_eq!(token.to_string(), r#"{"action":"add","ids":[1,2]}"#);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            JToken::parse("{\"open\": "),
            Err(JsonError::ParseError(_))
        ));
    }
}

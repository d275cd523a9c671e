// Copyright (C) 2015-2025 The Neo Project.
//
// transaction_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Builder for transaction requests.

use crate::converter::Converter;
use crate::error::{ConverterError, ConverterResult};
use crate::numeric::NumericValue;
use crate::transaction::{DataType, TransactionRequest};
use icon_config::TransactionDefaults;
use icon_json::{JObject, JToken};
use tracing::debug;

/// Fluent builder for [`TransactionRequest`].
///
/// Typed setters never fail. [`field`](Self::field) may; its first error is
/// kept and returned by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    request: TransactionRequest,
    error: Option<ConverterError>,
}

impl TransactionBuilder {
    /// Creates a builder with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with `nid`, `version` and `stepLimit` taken from `defaults`.
    ///
    /// # Arguments
    ///
    /// * `defaults` - Network and envelope defaults, usually loaded from TOML
    ///
    /// # Returns
    ///
    /// A builder that later setters may override
    pub fn with_defaults(defaults: &TransactionDefaults) -> Self {
        let mut builder = Self::new()
            .nid(defaults.network.nid())
            .version(defaults.version);
        if let Some(step_limit) = defaults.step_limit {
            builder = builder.step_limit(step_limit);
        }
        builder
    }

    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.request.from = Some(address.into());
        self
    }

    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.request.to = Some(address.into());
        self
    }

    /// Sets the amount to transfer, in loop.
    pub fn value(mut self, value: impl Into<NumericValue>) -> Self {
        self.request.value = Some(value.into());
        self
    }

    pub fn step_limit(mut self, step_limit: impl Into<NumericValue>) -> Self {
        self.request.step_limit = Some(step_limit.into());
        self
    }

    pub fn nid(mut self, nid: impl Into<NumericValue>) -> Self {
        self.request.nid = Some(nid.into());
        self
    }

    pub fn nonce(mut self, nonce: impl Into<NumericValue>) -> Self {
        self.request.nonce = Some(nonce.into());
        self
    }

    pub fn version(mut self, version: impl Into<NumericValue>) -> Self {
        self.request.version = Some(version.into());
        self
    }

    /// Sets the timestamp, in microseconds since the Unix epoch.
    pub fn timestamp(mut self, timestamp: impl Into<NumericValue>) -> Self {
        self.request.timestamp = Some(timestamp.into());
        self
    }

    /// Stamps the request with the current time in microseconds.
    pub fn timestamp_now(self) -> Self {
        let micros = chrono::Utc::now().timestamp_micros();
        self.timestamp(micros)
    }

    /// Score method call. `params` is left out when empty.
    pub fn call(self, method: impl Into<String>, params: JObject) -> Self {
        let mut data = JObject::new();
        data.insert("method".to_string(), JToken::String(method.into()));
        if !params.is_empty() {
            data.insert("params".to_string(), JToken::Object(params));
        }
        self.payload(DataType::Call, JToken::Object(data))
    }

    /// Score deployment. `content` is the hex-encoded archive.
    pub fn deploy(
        self,
        content_type: impl Into<String>,
        content: impl Into<String>,
        params: JObject,
    ) -> Self {
        let mut data = JObject::new();
        data.insert("contentType".to_string(), JToken::String(content_type.into()));
        data.insert("content".to_string(), JToken::String(content.into()));
        if !params.is_empty() {
            data.insert("params".to_string(), JToken::Object(params));
        }
        self.payload(DataType::Deploy, JToken::Object(data))
    }

    /// Plain message; the text is sent as hex of its UTF-8 bytes.
    pub fn message(self, text: &str) -> Self {
        self.payload(DataType::Message, JToken::String(Converter::from_utf8(text)))
    }

    pub fn deposit_add(self) -> Self {
        let mut data = JObject::new();
        data.insert("action".to_string(), JToken::from("add"));
        self.payload(DataType::Deposit, JToken::Object(data))
    }

    /// Withdraws one deposit by id, or all of them when `id` is `None`.
    pub fn deposit_withdraw(self, id: Option<&str>) -> Self {
        let mut data = JObject::new();
        data.insert("action".to_string(), JToken::from("withdraw"));
        if let Some(id) = id {
            data.insert("id".to_string(), JToken::from(id));
        }
        self.payload(DataType::Deposit, JToken::Object(data))
    }

    /// Sets any field by wire name, including ones outside the envelope.
    pub fn field(mut self, name: &str, value: JToken) -> Self {
        if self.error.is_none() {
            if let Err(err) = self.request.set_field(name, value) {
                debug!(field = name, error = %err, "builder field rejected");
                self.error = Some(err);
            }
        }
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`field`](Self::field).
    pub fn build(self) -> ConverterResult<TransactionRequest> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.request),
        }
    }

    fn payload(mut self, data_type: DataType, data: JToken) -> Self {
        self.request.data_type = Some(data_type);
        self.request.data = Some(data);
        self
    }
}

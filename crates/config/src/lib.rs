//! ICON Configuration Module
//!
//! This module provides the network identifiers and transaction defaults used
//! when building ICON transaction requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Protocol version carried by every v3 transaction.
pub const TRANSACTION_VERSION: u32 = 3;

/// Number of decimal places between ICX and loop (1 ICX = 10^18 loop).
pub const ICX_DECIMALS: u32 = 18;

/// Step limit applied when a builder is seeded from defaults.
pub const DEFAULT_STEP_LIMIT: u64 = 100_000;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown network type: {0}")]
    UnknownNetwork(String),

    #[error("Invalid configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Network type for ICON blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkType {
    #[default]
    MainNet,
    Lisbon,
    Yeouido,
    Berlin,
    /// Local or private network with its own network id.
    Private(u32),
}

impl NetworkType {
    /// Gets the network id (`nid`) sent in every transaction
    pub fn nid(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x1,
            NetworkType::Lisbon => 0x2,
            NetworkType::Yeouido => 0x3,
            NetworkType::Berlin => 0x7,
            NetworkType::Private(nid) => *nid,
        }
    }

    /// Resolves a network id back to a known network.
    pub fn from_nid(nid: u32) -> Self {
        match nid {
            0x1 => NetworkType::MainNet,
            0x2 => NetworkType::Lisbon,
            0x3 => NetworkType::Yeouido,
            0x7 => NetworkType::Berlin,
            other => NetworkType::Private(other),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::Lisbon => write!(f, "lisbon"),
            NetworkType::Yeouido => write!(f, "yeouido"),
            NetworkType::Berlin => write!(f, "berlin"),
            NetworkType::Private(nid) => write!(f, "private:{nid}"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "mainnet" | "main" => Ok(NetworkType::MainNet),
            "lisbon" => Ok(NetworkType::Lisbon),
            "yeouido" => Ok(NetworkType::Yeouido),
            "berlin" => Ok(NetworkType::Berlin),
            _ => lower
                .strip_prefix("private:")
                .and_then(parse_nid)
                .map(NetworkType::Private)
                .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

fn parse_nid(text: &str) -> Option<u32> {
    match text.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

impl TryFrom<String> for NetworkType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NetworkType> for String {
    fn from(value: NetworkType) -> Self {
        value.to_string()
    }
}

/// Values a transaction builder falls back to when the caller leaves a field unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDefaults {
    pub network: NetworkType,
    pub version: u32,
    pub step_limit: Option<u64>,
}

impl Default for TransactionDefaults {
    fn default() -> Self {
        Self {
            network: NetworkType::MainNet,
            version: TRANSACTION_VERSION,
            step_limit: Some(DEFAULT_STEP_LIMIT),
        }
    }
}

impl TransactionDefaults {
    /// Defaults for the given network, everything else standard.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Parses defaults from a TOML document. Missing keys keep their default.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }
}

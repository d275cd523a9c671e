//! # icon-rs: ICON transaction wire conversion in Rust
//!
//! Turns caller-built ICON v3 transaction requests into the exact JSON object
//! a JSON-RPC endpoint expects for `icx_sendTransaction`.
//!
//! - Numeric envelope fields (`value`, `stepLimit`, `nid`, `nonce`,
//!   `version`, `timestamp`) are encoded as canonical `0x` hex
//! - Addresses, `dataType` and the `data` payload are copied verbatim
//! - Absent fields stay absent
//!
//! ## Quick Start
//!
//! ```rust
//! use icon_rs::prelude::*;
//!
//! let defaults = TransactionDefaults::from_toml_str("network = \"yeouido\"").unwrap();
//! let request = TransactionBuilder::with_defaults(&defaults)
//!     .from("hx46293d558d3bd489c3715e7e3648de0e35086bfd")
//!     .to("hx87a90bfe8ed49e1a25184ce77fa0d9c4b0484d6a")
//!     .value(0)
//!     .message("Aqua Man")
//!     .build()
//!     .unwrap();
//!
//! let raw = to_raw_transaction(&request).unwrap();
//! assert_eq!(raw.get_str("nid"), Some("0x3"));
//! assert_eq!(raw.get_str("data"), Some("0x41717561204d616e"));
//! ```
//!
//! ## Architecture
//!
//! - [`icon_core`] - Hex codec, transaction request model, normalizer and builder
//! - [`icon_config`] - Network identifiers and transaction defaults
//! - [`icon_json`] - Ordered JSON values used for opaque payloads

#![warn(rustdoc::missing_crate_level_docs)]

pub use icon_config as config;
pub use icon_core as core;
pub use icon_json as json;

/// Common imports for building and converting transactions
pub mod prelude {
    pub use crate::config::{NetworkType, TransactionDefaults};
    pub use crate::core::{
        to_raw_transaction, Converter, ConverterError, ConverterResult, DataType, IconAmount,
        NumericValue, RawTransaction, TransactionBuilder, TransactionRequest, Unit,
    };
    pub use crate::json::{JObject, JToken};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

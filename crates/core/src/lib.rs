// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// modifications are permitted.

//! # ICON Core
//!
//! Wire conversion of ICON v3 transaction requests.
//!
//! An SDK caller assembles a [`TransactionRequest`], usually through a
//! [`TransactionBuilder`], with numbers in whatever representation is at
//! hand. [`to_raw_transaction`] turns it into a [`RawTransaction`], the
//! object sent as `params` of `icx_sendTransaction`.
//!
//! ## Features
//!
//! - **Hex codec**: canonical `0x` encoding of arbitrary-precision integers
//! - **Normalizer**: hex-encodes the numeric envelope and copies the rest verbatim
//! - **Amounts**: exact ICX and loop arithmetic
//! - **Builder**: fluent request construction with configurable defaults
//!
//! ## Example
//!
//! ```rust
//! use icon_core::{to_raw_transaction, IconAmount, TransactionBuilder, Unit};
//!
//! let request = TransactionBuilder::new()
//!     .from("hx46293d558d3bd489c3715e7e3648de0e35086bfd")
//!     .to("hx87a90bfe8ed49e1a25184ce77fa0d9c4b0484d6a")
//!     .value(IconAmount::of(7, Unit::Icx).to_loop().unwrap())
//!     .step_limit(100_000)
//!     .nid(3)
//!     .build()
//!     .unwrap();
//!
//! let raw = to_raw_transaction(&request).unwrap();
//! assert_eq!(raw.get_str("value"), Some("0x6124fee993bc0000"));
//! assert_eq!(raw.get_str("stepLimit"), Some("0x186a0"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

/// ICX amounts and units
pub mod amount;
/// Builder pattern implementations
pub mod builders;
/// Value conversion helpers
pub mod converter;
/// Core error types
pub mod error;
/// Canonical integer hex codec
pub mod hex_codec;
/// Caller-side numeric values
pub mod numeric;
/// Transaction request, raw form and normalizer
pub mod transaction;

pub use amount::{IconAmount, Unit};
pub use builders::TransactionBuilder;
pub use converter::{Converter, HexEncode};
pub use error::{ConverterError, ConverterResult, ErrorKind};
pub use hex_codec::IntegerHexCodec;
pub use numeric::NumericValue;
pub use transaction::{
    to_raw_transaction, DataType, EnvelopeField, FieldEncoding, RawTransaction,
    TransactionRequest,
};

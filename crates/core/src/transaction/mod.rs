// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// modifications are permitted.

//! Transaction module for ICON v3 transactions.
//!
//! The request side models what an SDK caller builds, the raw side is what a
//! JSON-RPC endpoint receives:
//!
//! - `data_type` - The `dataType` tag of a transaction payload
//! - `envelope` - The fixed table of envelope fields and their wire treatment
//! - `request` - Caller-built `TransactionRequest`
//! - `raw` - Wire-ready `RawTransaction`
//! - `normalizer` - Conversion from request to raw transaction

pub mod data_type;
pub mod envelope;
pub mod normalizer;
pub mod raw;
pub mod request;

pub use data_type::DataType;
pub use envelope::{EnvelopeField, FieldEncoding};
pub use normalizer::to_raw_transaction;
pub use raw::RawTransaction;
pub use request::TransactionRequest;

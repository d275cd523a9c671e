// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// modifications are permitted.

//! Builder patterns for ICON transactions.

pub mod transaction_builder;

pub use transaction_builder::TransactionBuilder;

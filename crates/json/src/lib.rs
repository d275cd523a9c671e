//! # ICON JSON Library
//!
//! Opaque JSON values for ICON transaction payloads.
//!
//! The `data` field of a transaction depends on its `dataType` (`call`,
//! `deploy`, `message`, `deposit`) and keeps evolving with the protocol. This
//! crate models it as a plain tagged union, [`JToken`], so the converter can
//! copy it field for field without knowing its shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use icon_json::*;
//!
//! let mut params = JObject::new();
//! params.insert("account".to_string(), JToken::from("hx16293d558d3bd489c3715e7e3648de0e35086bfd"));
//! params.insert("amount".to_string(), JToken::from("0x3"));
//!
//! let mut data = JObject::new();
//! data.insert("method".to_string(), JToken::from("burn"));
//! data.insert("params".to_string(), JToken::from(params));
//!
//! let token = JToken::from(data);
//! assert_eq!(
//!     token.get_property("params").and_then(|p| p.get_property("amount")),
//!     Some(&JToken::from("0x3"))
//! );
//! ```

pub mod error;
pub mod j_token;
pub mod ordered_dictionary;

pub use error::{JsonError, JsonResult};
pub use j_token::{JArray, JObject, JToken};
pub use ordered_dictionary::OrderedDictionary;

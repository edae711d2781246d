//! # NSON
//!
//! **TYPED JSON DECODING WITH A REQUIRED-FIELD PRESENCE CONTRACT**
//!
//! Every field a record declares must arrive with a non-null value unless it
//! is marked `[optional]`. Decoding is delegated to serde_json; this crate adds
//! the presence gate on top.
//!
//! ```
//! use nson::record;
//! use serde::{Deserialize, Serialize};
//!
//! record! {
//!     #[derive(Debug, Serialize, Deserialize)]
//!     pub struct User {
//!         pub name: String,
//!         pub nickname: String [optional],
//!     }
//! }
//!
//! let user: User = nson::from_json(r#"{"name": "Ada"}"#).unwrap();
//! assert_eq!(user.name.as_deref(), Some("Ada"));
//!
//! let err = nson::from_json::<User>(r#"{"nickname": "Ace"}"#).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "The required property \"name\" is not present in the supplied JSON."
//! );
//! ```

pub mod api;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod record;
pub mod types;
pub mod validation;

pub use codec::Nson;
pub use errors::{NsonError, NsonResult};

use record::Record;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Decodes JSON text into `R` through the shared [`Nson`] instance and
/// enforces the presence contract.
pub fn from_json<R: Record>(json: &str) -> NsonResult<R> {
    Nson::instance().from_json(json)
}

/// Byte-slice form of [`from_json`].
pub fn from_slice<R: Record>(data: &[u8]) -> NsonResult<R> {
    Nson::instance().from_slice(data)
}

/// [`from_json`] for an already-parsed value.
pub fn from_value<R: Record>(value: JsonValue) -> NsonResult<R> {
    Nson::instance().from_value(value)
}

/// Encodes any serializable value. No validation is applied.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> NsonResult<String> {
    Nson::instance().to_json(value)
}

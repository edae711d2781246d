//! Public facade re-exports.

pub use crate::codec::Nson;
pub use crate::errors::{NsonError, NsonResult};
pub use crate::record::{Presence, Record};
pub use crate::types::{FieldDecl, Optionality, Schema};
pub use crate::validation::{missing_required, validate_presence, PresenceValidator, Validator};
pub use crate::{from_json, from_slice, from_value, record, to_json};

//! Decoder invocation. serde_json's default mapping rules apply; no custom
//! rules are exposed.

use crate::errors::NsonError;
use crate::record::Record;
use serde_json::Value as JsonValue;

fn decode_failed<R: Record>(err: serde_json::Error) -> NsonError {
    log::debug!("failed to decode `{}`: {}", R::SCHEMA.name(), err);
    NsonError::Decode(err)
}

/// Decodes JSON text.
pub fn decode_str<R: Record>(text: &str) -> Result<R, NsonError> {
    serde_json::from_str(text).map_err(decode_failed::<R>)
}

/// Decodes JSON bytes.
pub fn decode_slice<R: Record>(data: &[u8]) -> Result<R, NsonError> {
    serde_json::from_slice(data).map_err(decode_failed::<R>)
}

/// Decodes an already-parsed JSON value.
pub fn decode_value<R: Record>(value: JsonValue) -> Result<R, NsonError> {
    serde_json::from_value(value).map_err(decode_failed::<R>)
}

//! # NSON CODEC
//!
//! The process-wide decode/encode entry point. The instance is built once,
//! on first use, and shared read-only afterwards.

use crate::decode::{decode_slice, decode_str, decode_value};
use crate::encode::encode_string;
use crate::errors::NsonResult;
use crate::record::Record;
use crate::validation::validate_presence;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicUsize, Ordering};

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

static INSTANCE: Lazy<Nson> = Lazy::new(Nson::new);

/// **NSON CODEC**
///
/// Decodes JSON into [`Record`] types and rejects any record whose required
/// fields are absent or null. Encoding is a plain passthrough.
///
/// Only reachable through [`Nson::instance`].
#[derive(Debug)]
#[non_exhaustive]
pub struct Nson;

impl Nson {
    fn new() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        log::trace!("constructing shared Nson codec (construction #{})", count);
        Nson
    }

    /// Returns the shared instance, building it on first call.
    pub fn instance() -> &'static Nson {
        &INSTANCE
    }

    /// Number of times the shared instance has been built.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    /// Decodes `json` into `R` and checks every required field is present.
    pub fn from_json<R: Record>(&self, json: &str) -> NsonResult<R> {
        Self::checked(decode_str(json)?)
    }

    /// Byte-slice form of [`Nson::from_json`].
    pub fn from_slice<R: Record>(&self, data: &[u8]) -> NsonResult<R> {
        Self::checked(decode_slice(data)?)
    }

    /// [`Nson::from_json`] for an already-parsed value.
    pub fn from_value<R: Record>(&self, value: JsonValue) -> NsonResult<R> {
        Self::checked(decode_value(value)?)
    }

    /// Encodes `value` with default rules. No presence check is applied.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> NsonResult<String> {
        encode_string(value)
    }

    fn checked<R: Record>(record: R) -> NsonResult<R> {
        validate_presence(&record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NsonError;
    use serde::Deserialize;
    use serde_json::json;

    crate::record! {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        struct Session {
            token: String,
            expires: u64,
            scope: String [optional],
        }
    }

    #[test]
    fn test_instance_is_shared() {
        let a = Nson::instance();
        let b = Nson::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(std::mem::size_of::<Nson>(), 0);
    }

    #[test]
    fn test_from_json_success() {
        let session: Session = Nson::instance()
            .from_json(r#"{"token": "abc", "expires": 60}"#)
            .unwrap();
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(session.scope, None);
    }

    #[test]
    fn test_from_json_explicit_null_is_missing() {
        let result = Nson::instance().from_json::<Session>(r#"{"token": null, "expires": 60}"#);
        assert_eq!(result.unwrap_err().missing_field(), Some("token"));
    }

    #[test]
    fn test_from_slice_and_value() {
        let nson = Nson::instance();
        assert!(nson
            .from_slice::<Session>(br#"{"token": "t", "expires": 1}"#)
            .is_ok());
        let err = nson
            .from_value::<Session>(json!({"token": "t", "scope": "all"}))
            .unwrap_err();
        assert!(matches!(
            err,
            NsonError::RequiredPropertyMissing { field: "expires" }
        ));
    }

    #[test]
    fn test_decode_error_takes_precedence() {
        let err = Nson::instance()
            .from_json::<Session>(r#"{"token": 7}"#)
            .unwrap_err();
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_to_json_skips_validation() {
        let partial = Session {
            token: None,
            expires: Some(5),
            scope: None,
        };
        let text = Nson::instance().to_json(&partial).unwrap();
        assert_eq!(text, r#"{"expires":5}"#);
    }
}

//! Error type shared by decoding, validation and encoding.

use thiserror::Error;

/// **STANDARD ERROR CODES**
///
/// Stable identifiers for each failure kind, returned by [`NsonError::code`].
pub mod error_codes {
    /// Input text could not be decoded.
    pub const DECODE_FAILED: &str = "NSON_DECODE_FAILED";
    /// A required field was absent or null.
    pub const REQUIRED_PROPERTY_MISSING: &str = "NSON_REQUIRED_PROPERTY_MISSING";
    /// Schema and accessor disagree.
    pub const INTROSPECTION_FAILED: &str = "NSON_INTROSPECTION_FAILED";
    /// Serializer failure.
    pub const ENCODE_FAILED: &str = "NSON_ENCODE_FAILED";
}

/// **NSON ERROR**
///
/// Decode failures and presence failures are separate variants so callers can
/// branch on them; `Introspection` signals a defect in a `Record` impl.
#[derive(Debug, Error)]
pub enum NsonError {
    /// The input could not be mapped onto the target record type.
    #[error("DECODE ERROR: {0}")]
    Decode(#[source] serde_json::Error),

    /// Decoding succeeded but a required field is null or absent.
    #[error("The required property \"{field}\" is not present in the supplied JSON.")]
    RequiredPropertyMissing {
        /// Declared name of the missing field.
        field: &'static str,
    },

    /// The record's schema names a field its accessor cannot report.
    #[error("INTROSPECTION ERROR: record `{record}` declares field `{field}` but does not expose it")]
    Introspection {
        /// Record type name.
        record: &'static str,
        /// Field the accessor did not report.
        field: &'static str,
    },

    /// The value's `Serialize` impl failed.
    #[error("ENCODE ERROR: {0}")]
    Encode(#[source] serde_json::Error),
}

impl NsonError {
    /// Stable code from [`error_codes`].
    pub fn code(&self) -> &'static str {
        match self {
            NsonError::Decode(_) => error_codes::DECODE_FAILED,
            NsonError::RequiredPropertyMissing { .. } => error_codes::REQUIRED_PROPERTY_MISSING,
            NsonError::Introspection { .. } => error_codes::INTROSPECTION_FAILED,
            NsonError::Encode(_) => error_codes::ENCODE_FAILED,
        }
    }

    /// Name of the offending field for presence failures.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            NsonError::RequiredPropertyMissing { field } => Some(*field),
            _ => None,
        }
    }

    /// True for [`NsonError::RequiredPropertyMissing`].
    pub fn is_presence_failure(&self) -> bool {
        matches!(self, NsonError::RequiredPropertyMissing { .. })
    }

    /// True for [`NsonError::Decode`].
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, NsonError::Decode(_))
    }
}

/// Crate-wide result alias.
pub type NsonResult<T> = Result<T, NsonError>;

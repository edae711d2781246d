//! # NSON VALIDATION MODULE
//!
//! Post-decode presence checking built on the `Validator` trait.
//!
//! ## VALIDATION PIPELINE
//!
//! 1. **DECODE** - serde_json maps text onto the record type
//! 2. **PRESENCE** - every required field must hold a value
//!
//! ```
//! use nson::record;
//! use nson::validation::{PresenceValidator, Validator};
//! use serde::{Deserialize, Serialize};
//!
//! record! {
//!     #[derive(Debug, Serialize, Deserialize)]
//!     struct Sensor {
//!         id: u32,
//!     }
//! }
//!
//! let validator = PresenceValidator::<Sensor>::new();
//! let err = validator.validate(Sensor { id: None }).unwrap_err();
//! assert_eq!(err.missing_field(), Some("id"));
//! ```

use crate::errors::NsonError;
use crate::record::{Presence, Record};
use crate::types::FieldDecl;

pub mod presence;

pub use presence::PresenceValidator;

/// **CORE VALIDATOR TRAIT**
///
/// Validators take ownership of their input and hand it back on success.
pub trait Validator {
    /// Data type accepted by this validator
    type Input;

    /// Validated data type returned on success
    type Output;

    /// Must not panic. All failures are reported as [`NsonError`].
    fn validate(&self, input: Self::Input) -> Result<Self::Output, NsonError>;
}

/// Result alias for validators.
pub type ValidationResult<T> = Result<T, NsonError>;

/// Reads the presence of one declared field, mapping an unknown field to an
/// introspection error.
fn presence_of<R: Record>(instance: &R, field: &FieldDecl) -> ValidationResult<Presence> {
    instance.presence(field.name()).ok_or_else(|| {
        log::error!(
            "record `{}` declares field `{}` but its accessor does not expose it",
            R::SCHEMA.name(),
            field.name()
        );
        NsonError::Introspection {
            record: R::SCHEMA.name(),
            field: field.name(),
        }
    })
}

/// **PRESENCE CHECK**
///
/// Walks `R::SCHEMA` in declaration order and fails on the first required
/// field that is null. Optional fields are never read.
pub fn validate_presence<R: Record>(instance: &R) -> ValidationResult<()> {
    for field in R::SCHEMA.required() {
        if presence_of(instance, field)?.is_null() {
            log::debug!(
                "record `{}`: required field `{}` is missing",
                R::SCHEMA.name(),
                field.name()
            );
            return Err(NsonError::RequiredPropertyMissing {
                field: field.name(),
            });
        }
    }
    Ok(())
}

/// Every required field that is null, in declaration order.
///
/// Unlike [`validate_presence`] this does not stop at the first violation.
pub fn missing_required<R: Record>(instance: &R) -> ValidationResult<Vec<&'static str>> {
    let mut missing = Vec::new();
    for field in R::SCHEMA.required() {
        if presence_of(instance, field)?.is_null() {
            missing.push(field.name());
        }
    }
    Ok(missing)
}

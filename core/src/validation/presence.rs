//! # PRESENCE VALIDATOR
//!
//! Enforces the required/optional contract on one decoded record.

use super::{validate_presence, ValidationResult, Validator};
use crate::record::Record;
use std::fmt;
use std::marker::PhantomData;

/// **PRESENCE VALIDATOR**
///
/// Returns the record unchanged when every required field holds a value,
/// otherwise the first missing field in declaration order.
pub struct PresenceValidator<R> {
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> PresenceValidator<R> {
    /// Validator for record type `R`.
    pub const fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<R: Record> Default for PresenceValidator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for PresenceValidator<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PresenceValidator<R> {}

impl<R: Record> fmt::Debug for PresenceValidator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenceValidator")
            .field("record", &R::SCHEMA.name())
            .finish()
    }
}

impl<R: Record> Validator for PresenceValidator<R> {
    type Input = R;
    type Output = R;

    fn validate(&self, input: Self::Input) -> ValidationResult<Self::Output> {
        validate_presence(&input)?;
        Ok(input)
    }
}

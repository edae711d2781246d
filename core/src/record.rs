//! # RECORD TYPES
//!
//! A record is a struct decoded from JSON whose fields carry a
//! required/optional classification. The classification lives in a static
//! [`Schema`] attached to the type through the [`Record`] trait.
//!
//! ```
//! use nson::record;
//! use nson::record::{Presence, Record};
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
//! let user = User { name: Some("Ada".into()), nickname: None };
//! assert_eq!(User::SCHEMA.len(), 2);
//! assert_eq!(user.presence("nickname"), Some(Presence::Null));
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::Schema;

/// Whether a field carries a value on a particular instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// The field holds a value.
    Present,
    /// The field is absent or `null`.
    Null,
}

impl Presence {
    /// Maps `Some` to `Present` and `None` to `Null`.
    #[inline]
    pub fn of<T>(value: &Option<T>) -> Self {
        match value {
            Some(_) => Presence::Present,
            None => Presence::Null,
        }
    }

    /// True for [`Presence::Null`].
    #[inline]
    pub fn is_null(self) -> bool {
        matches!(self, Presence::Null)
    }
}

/// **RECORD TRAIT**
///
/// Implemented by every type that can pass through the presence gate.
/// [`record!`](crate::record!) derives it; hand-written impls must keep
/// `presence` in step with `SCHEMA`.
pub trait Record: Serialize + DeserializeOwned {
    /// Field declarations in declaration order.
    const SCHEMA: Schema;

    /// Reports whether `field` holds a value on this instance.
    ///
    /// Returns `None` when the instance has no field by that name.
    fn presence(&self, field: &str) -> Option<Presence>;
}

/// **RECORD DECLARATION MACRO**
///
/// Declares a struct together with its [`Record`] impl. Each field is written
/// with its inner type; the generated field is `Option<T>` so that absent keys
/// and explicit `null` both decode to `None`. A trailing `[optional]` marks a
/// field that may stay `None`. Every other field is required.
///
/// The struct must derive `Serialize` and `Deserialize`; the macro adds
/// `#[serde(default, skip_serializing_if = "Option::is_none")]` to each field.
///
/// Write the inner type, not `Option<T>`: a field declared `x: Option<T>`
/// becomes `Option<Option<T>>`. Absent keys and `null` still decode to the
/// outer `None`, so the presence check is unaffected, but the extra layer
/// is never populated with `Some(None)` by the decoder.
#[macro_export]
macro_rules! record {
    (@optionality) => {
        $crate::types::Optionality::Required
    };
    (@optionality optional) => {
        $crate::types::Optionality::Optional
    };
    (@optionality $other:ident) => {
        compile_error!(concat!(
            "unknown field marker `",
            stringify!($other),
            "`, expected `optional`"
        ))
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $([$marker:ident])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $fvis $field: ::core::option::Option<$ty>,
            )*
        }

        impl $crate::record::Record for $name {
            const SCHEMA: $crate::types::Schema = $crate::types::Schema::new(
                stringify!($name),
                &[
                    $(
                        $crate::types::FieldDecl::with_optionality(
                            stringify!($field),
                            $crate::record!(@optionality $($marker)?),
                        ),
                    )*
                ],
            );

            fn presence(&self, field: &str) -> ::core::option::Option<$crate::record::Presence> {
                match field {
                    $(
                        stringify!($field) => ::core::option::Option::Some(
                            $crate::record::Presence::of(&self.$field),
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

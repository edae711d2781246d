//! # NSON TYPE DEFINITIONS
//!
//! Static field tables describing record types. A [`Schema`] is built at
//! compile time (usually by [`record!`](crate::record!)) and lives for the
//! whole program.

/// **FIELD OPTIONALITY**
///
/// Fields are required unless explicitly marked optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Optionality {
    /// Must hold a value (the default).
    #[default]
    Required,
    /// May be absent or `null`.
    Optional,
}

impl Optionality {
    /// True for [`Optionality::Optional`].
    pub const fn is_optional(self) -> bool {
        matches!(self, Optionality::Optional)
    }
}

/// **FIELD DECLARATION**
///
/// One declared field of a record type: its name and whether it may be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDecl {
    name: &'static str,
    optionality: Optionality,
}

impl FieldDecl {
    /// Declares a required field.
    pub const fn new(name: &'static str) -> Self {
        Self::with_optionality(name, Optionality::Required)
    }

    /// Declares a field that may be absent or null.
    pub const fn optional(name: &'static str) -> Self {
        Self::with_optionality(name, Optionality::Optional)
    }

    /// Declares a field with explicit optionality.
    pub const fn with_optionality(name: &'static str, optionality: Optionality) -> Self {
        Self { name, optionality }
    }

    /// Field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field optionality.
    #[inline]
    pub const fn optionality(&self) -> Optionality {
        self.optionality
    }

    /// True unless the field is marked optional.
    #[inline]
    pub const fn is_required(&self) -> bool {
        !self.optionality.is_optional()
    }
}

/// **RECORD SCHEMA**
///
/// Ordered field declarations of one record type. Declaration order is the
/// order the presence validator checks fields in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    fields: &'static [FieldDecl],
}

impl Schema {
    /// Builds a schema from its name and ordered field table.
    pub const fn new(name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Self { name, fields }
    }

    /// Record type name, used in diagnostics.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// All fields in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldDecl] {
        self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Required fields in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &'static FieldDecl> {
        self.fields.iter().filter(|field| field.is_required())
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(FieldDecl::name)
    }

    /// Number of declared fields.
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no fields are declared.
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: Schema = Schema::new(
        "Account",
        &[
            FieldDecl::new("id"),
            FieldDecl::optional("alias"),
            FieldDecl::new("owner"),
        ],
    );

    #[test]
    fn test_required_is_default() {
        assert_eq!(Optionality::default(), Optionality::Required);
        assert!(FieldDecl::new("id").is_required());
        assert!(!FieldDecl::optional("alias").is_required());
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let names: Vec<_> = ACCOUNT.field_names().collect();
        assert_eq!(names, vec!["id", "alias", "owner"]);
        assert_eq!(ACCOUNT.len(), 3);
        assert!(!ACCOUNT.is_empty());
        assert_eq!(ACCOUNT.name(), "Account");
    }

    #[test]
    fn test_schema_required_skips_optional() {
        let required: Vec<_> = ACCOUNT.required().map(FieldDecl::name).collect();
        assert_eq!(required, vec!["id", "owner"]);
    }

    #[test]
    fn test_schema_field_lookup() {
        let alias = ACCOUNT.field("alias").unwrap();
        assert_eq!(alias.optionality(), Optionality::Optional);
        assert!(ACCOUNT.field("missing").is_none());
    }

    #[test]
    fn test_empty_schema() {
        const EMPTY: Schema = Schema::new("Empty", &[]);
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.required().count(), 0);
    }
}

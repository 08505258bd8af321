//! Shared behaviour of single-value contact fields.

use std::fmt;

/// A labeled, stringifiable value held by a contact record.
///
/// Implementors validate their value at construction time, so anything
/// reachable through this trait is already well-formed. The textual
/// rendering (`to_string()`) is always identical to [`Field::value`].
pub trait Field: fmt::Display {
    /// Short lowercase label naming the kind of field.
    const LABEL: &'static str;

    /// The stored value, exactly as it was accepted.
    fn value(&self) -> &str;

    /// Label of this field, e.g. `"name"` or `"phone"`.
    fn label(&self) -> &'static str {
        Self::LABEL
    }
}

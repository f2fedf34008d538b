//! Extracted property schemas.
//!
//! A [`Schema`] is built once per value type from its [`DeclaredShape`] and
//! never mutated afterwards: an ordered, densely numbered property list plus
//! the formal parameter list. Extraction, wire naming, and default-category
//! resolution live in the submodules.

use std::collections::BTreeSet;

use crate::descriptor::TypeDescriptor;

mod defaults;
mod extract;
mod naming;
#[cfg(test)]
mod tests;

pub use defaults::{DefaultCategory, default_value};
pub use extract::extract;

/// One extracted property. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name after accessor-prefix stripping.
    pub name: String,
    /// Dense declaration-order index.
    pub ordinal: usize,
    /// Declared type, possibly referencing formal parameters.
    pub declared_type: TypeDescriptor,
    /// Whether the property admits null.
    pub nullable: bool,
    /// Primary wire name; the only name encode emits.
    pub wire_name: String,
    /// Decode-only synonyms for the same slot.
    pub alternate_wire_names: BTreeSet<String>,
    /// Whether the staged-construction helper carries a matching setter.
    pub has_staged_setter: bool,
    /// Whether a public accessor exists. Setter-only properties decode and
    /// participate in construction but are never read back.
    pub readable: bool,
    /// Fill-in category when the property is absent from input.
    pub default_category: DefaultCategory,
}

/// The extracted schema of one value type.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Value type name.
    pub type_name: String,
    /// Formal type parameter names, in declaration order.
    pub formal_parameters: Vec<String>,
    /// Properties in ordinal order.
    pub properties: Vec<Property>,
    /// True iff at least one property lacks a direct accessor but has a
    /// staged setter.
    pub uses_staged_construction: bool,
}

impl Schema {
    /// Whether the value type declares formal type parameters.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.formal_parameters.is_empty()
    }

    /// Looks up a property by (post-stripping) name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

//! Wire-name resolution.
//!
//! The primary wire name is the explicit override when one is declared and
//! the property name verbatim otherwise. Alternates come only from explicit
//! overrides and are decode-only synonyms; encode always emits the primary
//! name. Prefix stripping happens during extraction, not here.

use std::collections::BTreeSet;

use crate::shape::AccessorDecl;

/// Resolved naming for one property.
pub(super) struct ResolvedNames {
    pub primary: String,
    pub alternates: BTreeSet<String>,
}

pub(super) fn resolve(property_name: &str, accessor: &AccessorDecl) -> ResolvedNames {
    let primary = accessor
        .wire_name
        .clone()
        .unwrap_or_else(|| property_name.to_owned());
    let alternates = accessor
        .alternate_wire_names
        .iter()
        .filter(|name| **name != primary)
        .cloned()
        .collect();
    ResolvedNames { primary, alternates }
}

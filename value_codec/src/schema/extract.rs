//! Property extraction from a declared shape.

use crate::shape::{DeclaredShape, StagedSetterDecl};

use super::{Property, Schema, defaults, naming};

/// Strips a conventional accessor prefix and normalizes the first letter.
///
/// Both `snake_case` (`get_name`, `is_awesome`) and `camelCase` (`getName`,
/// `isAwesome`) conventions are recognized; anything else passes through
/// verbatim, as does a bare `get` or `is`.
fn property_name(accessor_name: &str) -> String {
    strip_prefix(accessor_name, "get")
        .or_else(|| strip_prefix(accessor_name, "is"))
        .unwrap_or_else(|| accessor_name.to_owned())
}

/// Setter names additionally shed a conventional `set` prefix.
fn setter_property_name(setter_name: &str) -> String {
    strip_prefix(setter_name, "set").unwrap_or_else(|| property_name(setter_name))
}

fn strip_prefix(name: &str, prefix: &str) -> Option<String> {
    let rest = name.strip_prefix(prefix)?;
    if let Some(snake) = rest.strip_prefix('_') {
        return (!snake.is_empty()).then(|| snake.to_owned());
    }
    let mut chars = rest.chars();
    let first = chars.next()?;
    first
        .is_uppercase()
        .then(|| first.to_lowercase().chain(chars).collect())
}

/// Extracts the ordered property schema from a declared shape.
///
/// Properties appear in accessor declaration order; setters with no matching
/// accessor are retained afterwards as write-only properties, which makes
/// the ordinal sequence dense by construction.
#[must_use]
pub fn extract(shape: &DeclaredShape) -> Schema {
    let mut properties = Vec::with_capacity(shape.accessors.len());

    for accessor in &shape.accessors {
        let name = property_name(&accessor.name);
        let names = naming::resolve(&name, accessor);
        let has_staged_setter = shape
            .staged_setters
            .iter()
            .any(|s| matches_property(s, &name, accessor));
        properties.push(Property {
            ordinal: properties.len(),
            declared_type: accessor.declared_type.clone(),
            nullable: accessor.nullable,
            wire_name: names.primary,
            alternate_wire_names: names.alternates,
            has_staged_setter,
            readable: true,
            default_category: defaults::category_of(&accessor.declared_type, accessor.nullable),
            name,
        });
    }

    let mut write_only = 0usize;
    for setter in &shape.staged_setters {
        let name = setter_property_name(&setter.name);
        if properties.iter().any(|p| p.name == name) {
            continue;
        }
        write_only += 1;
        properties.push(Property {
            ordinal: properties.len(),
            declared_type: setter.declared_type.clone(),
            nullable: setter.nullable,
            wire_name: name.clone(),
            alternate_wire_names: Default::default(),
            has_staged_setter: true,
            readable: false,
            default_category: defaults::category_of(&setter.declared_type, setter.nullable),
            name,
        });
    }

    Schema {
        type_name: shape.type_name.clone(),
        formal_parameters: shape.formal_parameters.clone(),
        properties,
        uses_staged_construction: write_only > 0,
    }
}

/// A setter backs a property when its normalized name and declared type both
/// agree with the accessor's.
fn matches_property(
    setter: &StagedSetterDecl,
    property: &str,
    accessor: &crate::shape::AccessorDecl,
) -> bool {
    setter_property_name(&setter.name) == property
        && setter.declared_type == accessor.declared_type
}

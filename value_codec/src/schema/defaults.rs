//! Default resolution: the fill-in value for a property absent from input.

use crate::descriptor::TypeDescriptor;
use crate::value::Value;

/// The category deciding a property's absent-on-decode fill value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    /// Integral primitive; fills with zero.
    Integer,
    /// Floating-point primitive; fills with zero.
    Float,
    /// Boolean primitive; fills with false.
    Boolean,
    /// Character primitive; fills with the null character.
    Character,
    /// Sequence or set container; fills with an empty sequence.
    Sequence,
    /// String-keyed mapping; fills with an empty mapping.
    Mapping,
    /// Nullable reference; fills with null.
    Nullable,
    /// Any other reference, including formal-parameter references; fills
    /// with null. Typed assembly decides whether that null is tolerable.
    Reference,
}

const INTEGER_NAMES: &[&str] = &["i8", "i16", "i32", "i64", "u8", "u16", "u32"];
const FLOAT_NAMES: &[&str] = &["f32", "f64"];
const SEQUENCE_NAMES: &[&str] = &["Vec", "VecDeque", "HashSet", "BTreeSet"];
const MAPPING_NAMES: &[&str] = &["HashMap", "BTreeMap"];

/// Resolves the default category for a declared type.
#[must_use]
pub fn category_of(declared_type: &TypeDescriptor, nullable: bool) -> DefaultCategory {
    if nullable {
        return DefaultCategory::Nullable;
    }
    let Some(name) = declared_type.name() else {
        // A bare formal-parameter reference; nothing better than null.
        return DefaultCategory::Reference;
    };
    if INTEGER_NAMES.contains(&name) {
        DefaultCategory::Integer
    } else if FLOAT_NAMES.contains(&name) {
        DefaultCategory::Float
    } else if name == "bool" {
        DefaultCategory::Boolean
    } else if name == "char" {
        DefaultCategory::Character
    } else if SEQUENCE_NAMES.contains(&name) {
        DefaultCategory::Sequence
    } else if MAPPING_NAMES.contains(&name) {
        DefaultCategory::Mapping
    } else {
        DefaultCategory::Reference
    }
}

/// The fill value for a category.
#[must_use]
pub fn default_value(category: DefaultCategory) -> Value {
    match category {
        DefaultCategory::Integer => Value::Integer(0),
        DefaultCategory::Float => Value::Float(0.0),
        DefaultCategory::Boolean => Value::Bool(false),
        DefaultCategory::Character => Value::Char('\0'),
        DefaultCategory::Sequence => Value::Seq(Vec::new()),
        DefaultCategory::Mapping => Value::Map(Vec::new()),
        DefaultCategory::Nullable | DefaultCategory::Reference => Value::Null,
    }
}

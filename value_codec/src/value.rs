//! Self-describing property values.
//!
//! Decoded fields and staging slots are carried as [`Value`] trees so the
//! synthesized codec can treat every property uniformly regardless of its
//! declared Rust type. The [`ToValue`] and [`FromValue`] traits bridge the
//! gap between a concrete value type's fields and the dynamic slot model;
//! the derive macro leans on them when emitting property bindings.

mod convert;

pub use convert::{FromValue, ToValue};

/// A dynamically typed property value.
///
/// Mappings preserve insertion order so that encode output remains stable;
/// they are keyed by strings because JSON object keys are strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or explicit JSON null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integral number. All integer widths normalize to `i64`.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Single character, serialized as a one-character string.
    Char(char),
    /// Text.
    Text(String),
    /// Ordered sequence; also carries set-like containers on the wire.
    Seq(Vec<Value>),
    /// String-keyed mapping in insertion order; also carries nested records
    /// keyed by property name.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Human-readable shape name used in mismatch diagnostics.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Char(_) => "character",
            Self::Text(_) => "text",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up an entry of a [`Value::Map`] by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

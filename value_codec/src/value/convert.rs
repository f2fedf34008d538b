//! Conversions between concrete field types and [`Value`] trees.
//!
//! Integer slots normalize to `i64`, which fixes the supported integer
//! widths at `i8` through `i64` and `u8` through `u32`. `u64`, `usize`, and
//! `isize` have no conversions: their ranges do not embed in `i64`, so a
//! lossless round trip cannot be promised.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::error::CodecError;

use super::Value;

/// Renders a field as a dynamic [`Value`].
pub trait ToValue {
    /// Converts a borrowed field into its dynamic representation.
    fn to_value(&self) -> Value;
}

/// Rebuilds a field from a decoded [`Value`] slot.
pub trait FromValue: Sized {
    /// Converts a decoded slot back into the concrete field type.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Mismatch`] when the slot's shape does not match
    /// the field type, including a null slot for a non-nullable field.
    fn from_value(value: Value) -> Result<Self, CodecError>;
}

macro_rules! integer_conversions {
    ($($ty:ty),+ $(,)?) => {$(
        impl ToValue for $ty {
            fn to_value(&self) -> Value {
                Value::Integer(i64::from(*self))
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, CodecError> {
                let Value::Integer(n) = value else {
                    return Err(CodecError::mismatch("integer", &value));
                };
                Self::try_from(n).map_err(|_| CodecError::Mismatch {
                    expected: concat!("integer fitting ", stringify!($ty)),
                    found: n.to_string(),
                })
            }
        }
    )+};
}

integer_conversions!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(CodecError::mismatch("boolean", &other)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Float(f) => Ok(f),
            // JSON does not distinguish `1` from `1.0`.
            #[expect(clippy::cast_precision_loss, reason = "accepting integral JSON numbers")]
            Value::Integer(n) => Ok(n as f64),
            other => Err(CodecError::mismatch("float", &other)),
        }
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        #[expect(clippy::cast_possible_truncation, reason = "f32 fields round-trip through f64")]
        f64::from_value(value).map(|f| f as Self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Char(c) => Ok(c),
            other => Err(CodecError::mismatch("character", &other)),
        }
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(CodecError::mismatch("text", &other)),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

fn seq_to_value<'a, T, I>(items: I) -> Value
where
    T: ToValue + 'a,
    I: Iterator<Item = &'a T>,
{
    Value::Seq(items.map(ToValue::to_value).collect())
}

fn value_to_seq(value: Value) -> Result<Vec<Value>, CodecError> {
    match value {
        Value::Seq(items) => Ok(items),
        other => Err(CodecError::mismatch("sequence", &other)),
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        seq_to_value(self.iter())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_seq(value)?.into_iter().map(T::from_value).collect()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        seq_to_value(self.iter())
    }
}

impl<T: FromValue> FromValue for VecDeque<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_seq(value)?.into_iter().map(T::from_value).collect()
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        seq_to_value(self.iter())
    }
}

impl<T: FromValue + Ord> FromValue for BTreeSet<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_seq(value)?.into_iter().map(T::from_value).collect()
    }
}

impl<T: ToValue> ToValue for HashSet<T> {
    fn to_value(&self) -> Value {
        seq_to_value(self.iter())
    }
}

impl<T: FromValue + Eq + Hash> FromValue for HashSet<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_seq(value)?.into_iter().map(T::from_value).collect()
    }
}

fn map_to_value<'a, V, I>(entries: I) -> Value
where
    V: ToValue + 'a,
    I: Iterator<Item = (&'a String, &'a V)>,
{
    Value::Map(entries.map(|(k, v)| (k.clone(), v.to_value())).collect())
}

fn value_to_map(value: Value) -> Result<Vec<(String, Value)>, CodecError> {
    match value {
        Value::Map(entries) => Ok(entries),
        other => Err(CodecError::mismatch("mapping", &other)),
    }
}

impl<V: ToValue> ToValue for BTreeMap<String, V> {
    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }
}

impl<V: FromValue> FromValue for BTreeMap<String, V> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_map(value)?
            .into_iter()
            .map(|(k, v)| Ok((k, V::from_value(v)?)))
            .collect()
    }
}

impl<V: ToValue> ToValue for HashMap<String, V> {
    fn to_value(&self) -> Value {
        map_to_value(self.iter())
    }
}

impl<V: FromValue> FromValue for HashMap<String, V> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        value_to_map(value)?
            .into_iter()
            .map(|(k, v)| Ok((k, V::from_value(v)?)))
            .collect()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        Ok(value)
    }
}

//! Sub-codecs: the paired encode/decode implementations properties resolve to.
//!
//! Every codec moves dynamic [`Value`]s across the stream abstraction. The
//! built-in set covers JSON scalars and the common container shapes; record
//! codecs synthesized from a schema implement the same trait, so one value
//! type's codec can serve as a property sub-codec of another.

use crate::error::CodecError;
use crate::stream::{JsonReader, JsonWriter};
use crate::value::Value;

mod containers;
mod scalars;
#[cfg(test)]
mod tests;

pub use containers::{MappingCodec, NullableCodec, SequenceCodec};
pub use scalars::{BoolCodec, CharCodec, FloatCodec, IntegerCodec, TextCodec};

/// A paired encoder/decoder for one wire type.
pub trait Codec: Send + Sync {
    /// Writes `value` to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Mismatch`] when `value`'s shape is not the one
    /// this codec encodes, and propagates stream errors unmodified.
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError>;

    /// Reads the next value from the stream.
    ///
    /// # Errors
    ///
    /// Propagates stream errors unmodified; no extra validation is added.
    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError>;
}

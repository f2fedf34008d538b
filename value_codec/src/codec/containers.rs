//! Codecs for container shapes and nullable wrappers.

use std::sync::Arc;

use crate::error::CodecError;
use crate::stream::{JsonReader, JsonWriter};
use crate::value::Value;

use super::Codec;

/// Sequences and set-like containers: a JSON array of one element type.
pub struct SequenceCodec {
    element: Arc<dyn Codec>,
}

impl SequenceCodec {
    /// A sequence codec over the given element codec.
    #[must_use]
    pub fn new(element: Arc<dyn Codec>) -> Self {
        Self { element }
    }
}

impl Codec for SequenceCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        let Value::Seq(items) = value else {
            return Err(CodecError::mismatch("sequence", value));
        };
        writer.begin_array()?;
        for item in items {
            self.element.encode(item, writer)?;
        }
        writer.end_array()
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.begin_array()?;
        let mut items = Vec::new();
        while reader.has_next_element()? {
            items.push(self.element.decode(reader)?);
        }
        reader.end_array()?;
        Ok(Value::Seq(items))
    }
}

/// String-keyed mappings: a JSON object with one value type.
pub struct MappingCodec {
    value: Arc<dyn Codec>,
}

impl MappingCodec {
    /// A mapping codec over the given value codec. Keys are strings.
    #[must_use]
    pub fn new(value: Arc<dyn Codec>) -> Self {
        Self { value }
    }
}

impl Codec for MappingCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        let Value::Map(entries) = value else {
            return Err(CodecError::mismatch("mapping", value));
        };
        writer.begin_object()?;
        for (key, entry) in entries {
            writer.name(key)?;
            self.value.encode(entry, writer)?;
        }
        writer.end_object()
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.begin_object()?;
        let mut entries = Vec::new();
        while reader.has_next_field()? {
            let key = reader.next_field_name()?;
            entries.push((key, self.value.decode(reader)?));
        }
        reader.end_object()?;
        Ok(Value::Map(entries))
    }
}

/// Wraps a codec so null passes through in both directions.
pub struct NullableCodec {
    inner: Arc<dyn Codec>,
}

impl NullableCodec {
    /// A nullable wrapper around `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn Codec>) -> Self {
        Self { inner }
    }
}

impl Codec for NullableCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        if value.is_null() {
            writer.write_null()
        } else {
            self.inner.encode(value, writer)
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        if reader.peek_is_null() {
            reader.read_null()?;
            Ok(Value::Null)
        } else {
            self.inner.decode(reader)
        }
    }
}

//! Codecs for JSON scalar shapes.

use crate::error::CodecError;
use crate::stream::{JsonReader, JsonWriter};
use crate::value::Value;

use super::Codec;

/// Booleans.
pub struct BoolCodec;

impl Codec for BoolCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            Value::Bool(b) => writer.write_bool(*b),
            other => Err(CodecError::mismatch("boolean", other)),
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.read_bool().map(Value::Bool)
    }
}

/// Integral numbers, normalized to `i64`.
pub struct IntegerCodec;

impl Codec for IntegerCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            Value::Integer(n) => writer.write_i64(*n),
            other => Err(CodecError::mismatch("integer", other)),
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.read_i64().map(Value::Integer)
    }
}

/// Floating-point numbers.
pub struct FloatCodec;

impl Codec for FloatCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            Value::Float(f) => writer.write_f64(*f),
            // Integral slots may flow into float-typed properties.
            #[expect(clippy::cast_precision_loss, reason = "accepting integral slots")]
            Value::Integer(n) => writer.write_f64(*n as f64),
            other => Err(CodecError::mismatch("float", other)),
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.read_f64().map(Value::Float)
    }
}

/// Single characters, carried as one-character strings.
pub struct CharCodec;

impl Codec for CharCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            Value::Char(c) => writer.write_str(&c.to_string()),
            other => Err(CodecError::mismatch("character", other)),
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        let text = reader.read_string()?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Value::Char(c)),
            _ => Err(CodecError::Mismatch {
                expected: "one-character string",
                found: format!("{text:?}"),
            }),
        }
    }
}

/// Strings.
pub struct TextCodec;

impl Codec for TextCodec {
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            Value::Text(s) => writer.write_str(s),
            other => Err(CodecError::mismatch("text", other)),
        }
    }

    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        reader.read_string().map(Value::Text)
    }
}

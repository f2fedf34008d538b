//! Unit tests for built-in sub-codecs.

use std::sync::Arc;

use anyhow::Result;
use rstest::rstest;

use crate::stream::{JsonReader, JsonWriter};
use crate::value::Value;

use super::{
    BoolCodec, CharCodec, Codec, FloatCodec, IntegerCodec, MappingCodec, NullableCodec,
    SequenceCodec, TextCodec,
};

fn encode_root(codec: &dyn Codec, value: &Value) -> Result<String> {
    let mut writer = JsonWriter::new();
    codec.encode(value, &mut writer)?;
    Ok(writer.into_string()?)
}

fn decode_root(codec: &dyn Codec, input: &str) -> Result<Value> {
    let mut reader = JsonReader::new(input)?;
    let value = codec.decode(&mut reader)?;
    reader.expect_end()?;
    Ok(value)
}

#[rstest]
#[case(&BoolCodec, Value::Bool(true), "true")]
#[case(&IntegerCodec, Value::Integer(-3), "-3")]
#[case(&FloatCodec, Value::Float(1.5), "1.5")]
#[case(&TextCodec, Value::Text("hi".into()), r#""hi""#)]
#[case(&CharCodec, Value::Char('x'), r#""x""#)]
fn scalars_round_trip(
    #[case] codec: &dyn Codec,
    #[case] value: Value,
    #[case] wire: &str,
) -> Result<()> {
    assert_eq!(encode_root(codec, &value)?, wire);
    assert_eq!(decode_root(codec, wire)?, value);
    Ok(())
}

#[test]
fn null_character_travels_as_escaped_string() -> Result<()> {
    let wire = encode_root(&CharCodec, &Value::Char('\0'))?;
    assert_eq!(wire, "\"\\u0000\"");
    assert_eq!(decode_root(&CharCodec, &wire)?, Value::Char('\0'));
    Ok(())
}

#[test]
fn char_rejects_longer_strings() -> Result<()> {
    assert!(decode_root(&CharCodec, r#""ab""#).is_err());
    Ok(())
}

#[test]
fn scalar_encode_rejects_wrong_shape() {
    let mut writer = JsonWriter::new();
    assert!(IntegerCodec.encode(&Value::Text("no".into()), &mut writer).is_err());
}

#[test]
fn sequence_round_trips_elements_in_order() -> Result<()> {
    let codec = SequenceCodec::new(Arc::new(IntegerCodec));
    let value = Value::Seq(vec![Value::Integer(1), Value::Integer(2)]);
    let wire = encode_root(&codec, &value)?;
    assert_eq!(wire, "[1,2]");
    assert_eq!(decode_root(&codec, &wire)?, value);
    Ok(())
}

#[test]
fn mapping_preserves_entry_order_on_encode() -> Result<()> {
    let codec = MappingCodec::new(Arc::new(TextCodec));
    let value = Value::Map(vec![
        ("z".into(), Value::Text("1".into())),
        ("a".into(), Value::Text("2".into())),
    ]);
    assert_eq!(encode_root(&codec, &value)?, r#"{"z":"1","a":"2"}"#);
    Ok(())
}

#[test]
fn nested_mapping_of_sequences_round_trips() -> Result<()> {
    let codec = MappingCodec::new(Arc::new(SequenceCodec::new(Arc::new(TextCodec))));
    let wire = r#"{"k":["v1","v2"]}"#;
    let value = decode_root(&codec, wire)?;
    assert_eq!(
        value.get("k"),
        Some(&Value::Seq(vec![
            Value::Text("v1".into()),
            Value::Text("v2".into()),
        ]))
    );
    assert_eq!(encode_root(&codec, &value)?, wire);
    Ok(())
}

#[test]
fn nullable_wrapper_passes_null_through() -> Result<()> {
    let codec = NullableCodec::new(Arc::new(TextCodec));
    assert_eq!(encode_root(&codec, &Value::Null)?, "null");
    assert_eq!(decode_root(&codec, "null")?, Value::Null);
    assert_eq!(
        decode_root(&codec, r#""x""#)?,
        Value::Text("x".into())
    );
    Ok(())
}

#[test]
fn decode_mismatch_propagates_from_stream() -> Result<()> {
    let codec = SequenceCodec::new(Arc::new(IntegerCodec));
    assert!(decode_root(&codec, r#"{"not":"an array"}"#).is_err());
    Ok(())
}

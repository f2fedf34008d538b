//! Unit tests for the stream primitives.

use anyhow::Result;

use crate::error::CodecError;

use super::{JsonReader, JsonWriter};

#[test]
fn writer_emits_fields_in_name_order() -> Result<()> {
    let mut w = JsonWriter::new();
    w.begin_object()?;
    w.name("b")?;
    w.write_i64(1)?;
    w.name("a")?;
    w.write_str("x")?;
    w.end_object()?;
    assert_eq!(w.into_string()?, r#"{"b":1,"a":"x"}"#);
    Ok(())
}

#[test]
fn writer_rejects_value_without_field_name() -> Result<()> {
    let mut w = JsonWriter::new();
    w.begin_object()?;
    assert!(w.write_i64(1).is_err());
    Ok(())
}

#[test]
fn writer_rejects_unbalanced_close() {
    let mut w = JsonWriter::new();
    assert!(w.end_object().is_err());
}

#[test]
fn writer_rejects_non_finite_float() -> Result<()> {
    let mut w = JsonWriter::new();
    assert!(w.write_f64(f64::NAN).is_err());
    Ok(())
}

#[test]
fn nested_arrays_round_trip() -> Result<()> {
    let mut w = JsonWriter::new();
    w.begin_object()?;
    w.name("xs")?;
    w.begin_array()?;
    w.write_i64(1)?;
    w.write_i64(2)?;
    w.end_array()?;
    w.end_object()?;
    assert_eq!(w.into_string()?, r#"{"xs":[1,2]}"#);
    Ok(())
}

#[test]
fn nested_objects_land_under_their_field_name() -> Result<()> {
    let mut w = JsonWriter::new();
    w.begin_object()?;
    w.name("outer")?;
    w.begin_object()?;
    w.name("inner")?;
    w.write_i64(7)?;
    w.end_object()?;
    w.name("tail")?;
    w.write_bool(false)?;
    w.end_object()?;
    assert_eq!(w.into_string()?, r#"{"outer":{"inner":7},"tail":false}"#);
    Ok(())
}

#[test]
fn reader_walks_fields_in_document_order() -> Result<()> {
    let mut r = JsonReader::new(r#"{"b":1,"a":"x"}"#)?;
    r.begin_object()?;
    assert!(r.has_next_field()?);
    assert_eq!(r.next_field_name()?, "b");
    assert_eq!(r.read_i64()?, 1);
    assert_eq!(r.next_field_name()?, "a");
    assert_eq!(r.read_string()?, "x");
    assert!(!r.has_next_field()?);
    r.end_object()?;
    r.expect_end()?;
    Ok(())
}

#[test]
fn reader_skips_values_of_any_shape() -> Result<()> {
    let mut r = JsonReader::new(r#"{"deep":{"a":[1,{"b":2}]},"keep":true}"#)?;
    r.begin_object()?;
    assert_eq!(r.next_field_name()?, "deep");
    r.skip_value()?;
    assert_eq!(r.next_field_name()?, "keep");
    assert!(r.read_bool()?);
    r.end_object()?;
    Ok(())
}

#[test]
fn reader_reports_null_marker() -> Result<()> {
    let mut r = JsonReader::new("null")?;
    assert!(r.peek_is_null());
    r.read_null()?;
    r.expect_end()?;
    Ok(())
}

#[test]
fn malformed_input_fails_at_construction() {
    assert!(matches!(
        JsonReader::new(r#"{"a": "#),
        Err(CodecError::Parse(_))
    ));
}

#[test]
fn scalar_type_mismatch_is_reported() -> Result<()> {
    let mut r = JsonReader::new(r#""text""#)?;
    assert!(r.read_i64().is_err());
    Ok(())
}

#[test]
fn closing_an_object_with_unread_fields_fails() -> Result<()> {
    let mut r = JsonReader::new(r#"{"a":1}"#)?;
    r.begin_object()?;
    assert!(r.end_object().is_err());
    Ok(())
}

#[test]
fn integral_number_reads_as_float() -> Result<()> {
    let mut r = JsonReader::new("3")?;
    assert!((r.read_f64()? - 3.0).abs() < f64::EPSILON);
    Ok(())
}

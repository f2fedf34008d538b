//! Round-trip and field-order behaviour for derived value types.

use anyhow::Result;
use value_codec::{CodecRegistry, ValueCodec, ValueRecord};

#[derive(Debug, PartialEq, Clone, ValueRecord)]
struct Update {
    #[codec(rename = "_D")]
    d: String,
    #[codec(alternate = "_I_1", alternate = "_I_2")]
    i: i64,
    flag: bool,
}

fn update_codec() -> Result<ValueCodec<Update>> {
    let registry = CodecRegistry::new();
    Ok(ValueCodec::new(&registry)?)
}

#[test]
fn encode_uses_primary_wire_names_in_declaration_order() -> Result<()> {
    let codec = update_codec()?;
    let update = Update {
        d: "x".into(),
        i: 3,
        flag: true,
    };
    assert_eq!(codec.encode(Some(&update))?, r#"{"_D":"x","i":3,"flag":true}"#);
    Ok(())
}

#[test]
fn decode_encode_is_identity() -> Result<()> {
    let codec = update_codec()?;
    let update = Update {
        d: "payload".into(),
        i: -12,
        flag: false,
    };
    let json = codec.encode(Some(&update))?;
    assert_eq!(codec.decode(&json)?, Some(update));
    Ok(())
}

#[test]
fn field_order_on_the_wire_does_not_leak_into_encoding() -> Result<()> {
    let codec = update_codec()?;
    let shuffled = r#"{"flag":true,"i":3,"_D":"x"}"#;
    let decoded = codec.decode(shuffled)?.expect("non-null document");
    assert_eq!(
        codec.encode(Some(&decoded))?,
        r#"{"_D":"x","i":3,"flag":true}"#
    );
    Ok(())
}

#[test]
fn alternates_decode_to_the_same_property() -> Result<()> {
    let codec = update_codec()?;
    let via_primary = codec.decode(r#"{"_D":"x","i":7,"flag":false}"#)?;
    let via_first = codec.decode(r#"{"_D":"x","_I_1":7,"flag":false}"#)?;
    let via_second = codec.decode(r#"{"_D":"x","_I_2":7,"flag":false}"#)?;
    assert_eq!(via_primary, via_first);
    assert_eq!(via_primary, via_second);
    Ok(())
}

#[test]
fn null_document_round_trips_as_absence() -> Result<()> {
    let codec = update_codec()?;
    assert_eq!(codec.encode(None)?, "null");
    assert_eq!(codec.decode("null")?, None);
    Ok(())
}

//! A generic API envelope round-tripped through synthesized codecs.
//!
//! `WebResponse<T>` is generic over its payload, so its codec is built
//! against an explicit type witness describing the instantiation.

use anyhow::Result;
use value_codec::{CodecRegistry, TypeDescriptor, TypeWitness, ValueCodec, ValueRecord};

#[derive(Debug, PartialEq, Clone, ValueRecord)]
struct Person {
    name: String,
    #[codec(alternate = "years")]
    age: u32,
}

#[derive(Debug, PartialEq, Clone, ValueRecord)]
struct WebResponse<T> {
    status: i64,
    errors: Option<String>,
    data: Vec<T>,
}

fn main() -> Result<()> {
    let registry = CodecRegistry::new();

    let person_codec: ValueCodec<Person> = ValueCodec::new(&registry)?;
    let ada = Person {
        name: "Ada".into(),
        age: 36,
    };
    println!("person: {}", person_codec.encode(Some(&ada))?);
    println!(
        "aliased decode: {:?}",
        person_codec.decode(r#"{"name":"Ada","years":36}"#)?
    );

    let witness = TypeWitness::new(vec![TypeDescriptor::named("String")])?;
    let response_codec: ValueCodec<WebResponse<String>> =
        ValueCodec::with_witness(&registry, witness)?;
    let response = WebResponse {
        status: 200,
        errors: None,
        data: vec!["ok".to_owned(), "cached".to_owned()],
    };
    let json = response_codec.encode(Some(&response))?;
    println!("response: {json}");
    assert_eq!(response_codec.decode(&json)?, Some(response));

    Ok(())
}

//! Value types nested inside other value types via the codec registry.

use std::sync::Arc;

use anyhow::Result;
use value_codec::{CodecError, CodecRegistry, FromValue, ToValue, Value, ValueCodec, ValueRecord};

#[derive(Debug, PartialEq, Clone, ValueRecord)]
struct Person {
    name: String,
    age: u32,
}

// Nesting a record inside another means its slot map must be readable and
// assemblable as an ordinary dynamic value.
impl ToValue for Person {
    fn to_value(&self) -> Value {
        Value::Map(vec![
            ("name".to_owned(), self.name.to_value()),
            ("age".to_owned(), self.age.to_value()),
        ])
    }
}

impl FromValue for Person {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        let Value::Map(entries) = value else {
            return Err(CodecError::Mismatch {
                expected: "person slot map",
                found: format!("{value:?}"),
            });
        };
        let mut name = None;
        let mut age = None;
        for (key, slot) in entries {
            match key.as_str() {
                "name" => name = Some(String::from_value(slot)?),
                "age" => age = Some(u32::from_value(slot)?),
                _ => {}
            }
        }
        let missing = |property: &str| CodecError::Assembly {
            property: property.to_owned(),
            reason: "slot missing".to_owned(),
        };
        Ok(Self {
            name: name.ok_or_else(|| missing("name"))?,
            age: age.ok_or_else(|| missing("age"))?,
        })
    }
}

#[derive(Debug, PartialEq, Clone, ValueRecord)]
struct Team {
    name: String,
    lead: Person,
}

fn registry_with_person() -> Result<CodecRegistry> {
    let mut registry = CodecRegistry::new();
    let person: ValueCodec<Person> = ValueCodec::new(&registry)?;
    registry.register_codec("Person", Arc::new(person.dynamic()));
    Ok(registry)
}

#[test]
fn nested_record_round_trips_as_an_object() -> Result<()> {
    let registry = registry_with_person()?;
    let codec: ValueCodec<Team> = ValueCodec::new(&registry)?;

    let team = Team {
        name: "telemetry".into(),
        lead: Person {
            name: "Ada".into(),
            age: 36,
        },
    };
    let json = codec.encode(Some(&team))?;
    assert_eq!(
        json,
        r#"{"name":"telemetry","lead":{"name":"Ada","age":36}}"#
    );
    assert_eq!(codec.decode(&json)?, Some(team));
    Ok(())
}

#[test]
fn unregistered_nested_type_fails_synthesis() {
    let registry = CodecRegistry::new();
    let err = ValueCodec::<Team>::new(&registry);
    assert!(matches!(err, Err(CodecError::UnknownType(name)) if name == "Person"));
}

#[test]
fn absent_nested_record_defaults_to_null_slot() -> Result<()> {
    let registry = registry_with_person()?;
    let codec: ValueCodec<Team> = ValueCodec::new(&registry)?;
    // The reference-category default is null; the typed assembly refuses it.
    let err = codec.decode(r#"{"name":"rump"}"#);
    assert!(matches!(err, Err(CodecError::Mismatch { .. })));
    Ok(())
}

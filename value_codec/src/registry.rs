//! The sub-codec registry.
//!
//! Resolution is descriptor-driven: scalars map straight to their codecs,
//! container factories recurse into their type arguments, and callers can
//! register additional codecs (including synthesized record codecs) so value
//! types can nest. Codecs are constructed once per resolution and shared via
//! `Arc`; a registry is expected to be built at start-up and reused.

use std::collections::HashMap;
use std::sync::Arc;

use crate::codec::{
    BoolCodec, CharCodec, Codec, FloatCodec, IntegerCodec, MappingCodec, SequenceCodec, TextCodec,
};
use crate::descriptor::TypeDescriptor;
use crate::error::CodecError;

type FactoryFn =
    Arc<dyn Fn(&CodecRegistry, &[TypeDescriptor]) -> Result<Arc<dyn Codec>, CodecError> + Send + Sync>;

/// Resolves concrete type descriptors to codecs.
#[derive(Clone)]
pub struct CodecRegistry {
    factories: HashMap<String, FactoryFn>,
}

fn expect_args(
    name: &str,
    args: &[TypeDescriptor],
    expected: usize,
) -> Result<(), CodecError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CodecError::UnknownType(format!(
            "{name} with {} type argument(s)",
            args.len()
        )))
    }
}

impl CodecRegistry {
    /// An empty registry with no codecs at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// A registry pre-loaded with the built-in scalar and container codecs.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();

        let integer: Arc<dyn Codec> = Arc::new(IntegerCodec);
        for name in ["i8", "i16", "i32", "i64", "u8", "u16", "u32"] {
            registry.register_codec(name, Arc::clone(&integer));
        }
        let float: Arc<dyn Codec> = Arc::new(FloatCodec);
        for name in ["f32", "f64"] {
            registry.register_codec(name, Arc::clone(&float));
        }
        registry.register_codec("bool", Arc::new(BoolCodec));
        registry.register_codec("char", Arc::new(CharCodec));
        registry.register_codec("String", Arc::new(TextCodec));

        for name in ["Vec", "VecDeque", "HashSet", "BTreeSet"] {
            registry.register_factory(name, move |registry, args| {
                expect_args(name, args, 1)?;
                let element = registry.resolve(&args[0])?;
                Ok(Arc::new(SequenceCodec::new(element)))
            });
        }
        for name in ["HashMap", "BTreeMap"] {
            registry.register_factory(name, move |registry, args| {
                expect_args(name, args, 2)?;
                if args[0] != TypeDescriptor::named("String") {
                    return Err(CodecError::UnknownType(format!(
                        "{name}<{}, _> (mapping keys must be strings)",
                        args[0]
                    )));
                }
                let value = registry.resolve(&args[1])?;
                Ok(Arc::new(MappingCodec::new(value)))
            });
        }

        registry
    }

    /// Registers a fixed codec for a non-parameterized type name.
    pub fn register_codec(&mut self, name: impl Into<String>, codec: Arc<dyn Codec>) {
        let name = name.into();
        let type_name = name.clone();
        self.factories.insert(
            name,
            Arc::new(move |_, args| {
                expect_args(&type_name, args, 0)?;
                Ok(Arc::clone(&codec))
            }),
        );
    }

    /// Registers a factory invoked with the descriptor's type arguments.
    pub fn register_factory<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&Self, &[TypeDescriptor]) -> Result<Arc<dyn Codec>, CodecError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Resolves a fully concrete descriptor to a codec.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownType`] for unregistered names and
    /// [`CodecError::UnresolvedParameter`] when the descriptor still
    /// references a formal parameter.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<Arc<dyn Codec>, CodecError> {
        match descriptor {
            TypeDescriptor::Parameter(index) => Err(CodecError::UnresolvedParameter {
                index: *index,
                type_name: "<registry>".to_owned(),
            }),
            TypeDescriptor::Concrete { name, args } => {
                let factory = self
                    .factories
                    .get(name)
                    .ok_or_else(|| CodecError::UnknownType(descriptor.to_string()))?;
                factory(self, args)
            }
        }
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::stream::{JsonReader, JsonWriter};
    use crate::value::Value;

    use super::*;

    fn descriptor(text: &str) -> TypeDescriptor {
        // Tests build descriptors by hand; this helper keeps cases short.
        match text {
            "Vec<i64>" => TypeDescriptor::parameterized("Vec", vec![TypeDescriptor::named("i64")]),
            "HashMap<String, Vec<String>>" => TypeDescriptor::parameterized(
                "HashMap",
                vec![
                    TypeDescriptor::named("String"),
                    TypeDescriptor::parameterized("Vec", vec![TypeDescriptor::named("String")]),
                ],
            ),
            name => TypeDescriptor::named(name),
        }
    }

    #[test]
    fn scalars_resolve() -> Result<()> {
        let registry = CodecRegistry::new();
        for name in ["bool", "i32", "f64", "char", "String"] {
            registry.resolve(&descriptor(name))?;
        }
        Ok(())
    }

    #[test]
    fn containers_resolve_recursively() -> Result<()> {
        let registry = CodecRegistry::new();
        let codec = registry.resolve(&descriptor("HashMap<String, Vec<String>>"))?;
        let mut reader = JsonReader::new(r#"{"k":["v"]}"#)?;
        let value = codec.decode(&mut reader)?;
        assert_eq!(value.get("k"), Some(&Value::Seq(vec![Value::Text("v".into())])));
        Ok(())
    }

    #[test]
    fn unknown_type_is_reported_with_its_shape() {
        let registry = CodecRegistry::new();
        let err = registry.resolve(&descriptor("Mystery"));
        assert!(matches!(err, Err(CodecError::UnknownType(name)) if name == "Mystery"));
    }

    #[test]
    fn non_string_map_keys_are_rejected() {
        let registry = CodecRegistry::new();
        let desc = TypeDescriptor::parameterized(
            "HashMap",
            vec![TypeDescriptor::named("i64"), TypeDescriptor::named("String")],
        );
        assert!(registry.resolve(&desc).is_err());
    }

    #[test]
    fn parameter_descriptor_cannot_resolve() {
        let registry = CodecRegistry::new();
        assert!(registry.resolve(&TypeDescriptor::parameter(0)).is_err());
    }

    #[test]
    fn custom_codec_registration_wins() -> Result<()> {
        struct Upper;
        impl crate::codec::Codec for Upper {
            fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
                match value {
                    Value::Text(s) => writer.write_str(&s.to_uppercase()),
                    other => Err(CodecError::mismatch("text", other)),
                }
            }
            fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
                Ok(Value::Text(reader.read_string()?.to_lowercase()))
            }
        }

        let mut registry = CodecRegistry::new();
        registry.register_codec("Shout", std::sync::Arc::new(Upper));
        let codec = registry.resolve(&descriptor("Shout"))?;
        let mut writer = JsonWriter::new();
        codec.encode(&Value::Text("hi".into()), &mut writer)?;
        assert_eq!(writer.into_string()?, r#""HI""#);
        Ok(())
    }
}

//! Record codec synthesis.
//!
//! [`RecordCodec`] is the synthesized encode/decode implementation for one
//! value type: per property it holds the resolved sub-codec, the primary
//! wire name, and the default slot, plus a dispatch map from every primary
//! and alternate wire name to a property ordinal, built once at
//! construction. The typed facade [`ValueCodec`] pairs a record codec with a
//! value type's bindings so callers work with real Rust values instead of
//! dynamic slot maps.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::codec::{Codec, NullableCodec};
use crate::descriptor::TypeWitness;
use crate::error::CodecError;
use crate::generate::{self, Diagnostics};
use crate::registry::CodecRegistry;
use crate::schema::{Schema, default_value};
use crate::stream::{JsonReader, JsonWriter};
use crate::value::Value;
use crate::{Assembler, ValueRecord};


#[derive(Clone)]
struct BoundProperty {
    name: String,
    wire_name: String,
    readable: bool,
    sub: Arc<dyn Codec>,
    default: Value,
}

/// The synthesized codec for one value type, operating on dynamic slot maps.
///
/// Implements [`Codec`], so a record codec registered under its type name
/// can serve as a sub-codec for properties of other value types.
#[derive(Clone)]
pub struct RecordCodec {
    type_name: String,
    properties: Vec<BoundProperty>,
    dispatch: HashMap<String, usize>,
}

impl RecordCodec {
    /// Builds the codec for `schema`, resolving one sub-codec per property.
    ///
    /// Generic schemas require a witness of matching arity; non-generic
    /// schemas reject any witness. Wire-name collisions between properties
    /// are construction errors.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::WitnessArity`], [`CodecError::DuplicateWireName`],
    /// or any sub-codec resolution failure.
    pub fn synthesize(
        schema: &Schema,
        registry: &CodecRegistry,
        witness: Option<&TypeWitness>,
    ) -> Result<Self, CodecError> {
        let declared = schema.formal_parameters.len();
        let supplied = witness.map_or(0, TypeWitness::len);
        if declared != supplied {
            return Err(CodecError::WitnessArity {
                type_name: schema.type_name.clone(),
                declared,
                supplied,
            });
        }

        let mut properties = Vec::with_capacity(schema.properties.len());
        let mut dispatch: HashMap<String, usize> = HashMap::new();

        for property in &schema.properties {
            let resolved = match witness {
                Some(witness) if property.declared_type.references_parameter() => {
                    property.declared_type.substitute(witness, &schema.type_name)?
                }
                _ => property.declared_type.clone(),
            };
            let mut sub = registry.resolve(&resolved)?;
            if property.nullable {
                sub = Arc::new(NullableCodec::new(sub));
            }

            for wire_name in
                std::iter::once(&property.wire_name).chain(&property.alternate_wire_names)
            {
                if let Some(&taken) = dispatch.get(wire_name) {
                    return Err(CodecError::DuplicateWireName {
                        name: wire_name.clone(),
                        type_name: schema.type_name.clone(),
                        first: schema.properties[taken].name.clone(),
                        second: property.name.clone(),
                    });
                }
                dispatch.insert(wire_name.clone(), property.ordinal);
            }

            properties.push(BoundProperty {
                name: property.name.clone(),
                wire_name: property.wire_name.clone(),
                readable: property.readable,
                sub,
                default: default_value(property.default_category),
            });
        }

        debug!(
            type_name = %schema.type_name,
            properties = properties.len(),
            "synthesized record codec"
        );
        Ok(Self {
            type_name: schema.type_name.clone(),
            properties,
            dispatch,
        })
    }

    /// The value type this codec serves.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Overrides the fill-in default for one property without touching the
    /// schema. The analogue of the generated per-property default setters.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownProperty`] for an unrecognized name.
    pub fn set_default(&mut self, property: &str, value: Value) -> Result<(), CodecError> {
        let slot = self
            .properties
            .iter_mut()
            .find(|p| p.name == property)
            .ok_or_else(|| CodecError::UnknownProperty {
                type_name: self.type_name.clone(),
                property: property.to_owned(),
            })?;
        slot.default = value;
        Ok(())
    }
}

impl Codec for RecordCodec {
    /// Encodes a slot map (or null) as a JSON object in ordinal order.
    ///
    /// Setter-only properties have no read path and are not emitted. A
    /// readable property missing from the map falls back to its configured
    /// default.
    fn encode(&self, value: &Value, writer: &mut JsonWriter) -> Result<(), CodecError> {
        if value.is_null() {
            return writer.write_null();
        }
        let Value::Map(_) = value else {
            return Err(CodecError::mismatch("record slot map", value));
        };
        writer.begin_object()?;
        for property in self.properties.iter().filter(|p| p.readable) {
            let slot = value.get(&property.name).unwrap_or(&property.default);
            writer.name(&property.wire_name)?;
            property.sub.encode(slot, writer)?;
        }
        writer.end_object()
    }

    /// Decodes a JSON object (or null) into a slot map keyed by property
    /// name, in ordinal order, with defaults for absent fields and unknown
    /// fields consumed and discarded.
    fn decode(&self, reader: &mut JsonReader) -> Result<Value, CodecError> {
        if reader.peek_is_null() {
            reader.read_null()?;
            return Ok(Value::Null);
        }
        reader.begin_object()?;
        let mut slots: Vec<Value> = self
            .properties
            .iter()
            .map(|p| p.default.clone())
            .collect();
        while reader.has_next_field()? {
            let field = reader.next_field_name()?;
            match self.dispatch.get(&field) {
                Some(&ordinal) => {
                    slots[ordinal] = self.properties[ordinal].sub.decode(reader)?;
                }
                None => reader.skip_value()?,
            }
        }
        reader.end_object()?;
        Ok(Value::Map(
            self.properties
                .iter()
                .zip(slots)
                .map(|(p, slot)| (p.name.clone(), slot))
                .collect(),
        ))
    }
}

/// The typed codec for one value type.
///
/// Construction runs the full generation pipeline: factory validation,
/// schema extraction, witness substitution, and sub-codec resolution. A
/// rejected or absent factory surfaces as [`CodecError::GenerationSkipped`].
pub struct ValueCodec<V: ValueRecord> {
    record: RecordCodec,
    assembler: Assembler<V>,
}

impl<V: ValueRecord> ValueCodec<V> {
    /// Builds the codec for a non-generic value type.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::GenerationSkipped`] when the factory validator
    /// declines, or any synthesis failure.
    pub fn new(registry: &CodecRegistry) -> Result<Self, CodecError> {
        Self::build(registry, None)
    }

    /// Builds the codec for a generic value type instantiated per `witness`.
    ///
    /// # Errors
    ///
    /// As [`ValueCodec::new`], plus [`CodecError::WitnessArity`] on a
    /// mismatched witness.
    pub fn with_witness(
        registry: &CodecRegistry,
        witness: TypeWitness,
    ) -> Result<Self, CodecError> {
        Self::build(registry, Some(witness))
    }

    fn build(registry: &CodecRegistry, witness: Option<TypeWitness>) -> Result<Self, CodecError> {
        let shape = V::declared_shape();
        let mut diagnostics = Diagnostics::new();
        let Some(schema) = generate::generate(&shape, &mut diagnostics) else {
            let reason = diagnostics
                .warnings()
                .last()
                .cloned()
                .unwrap_or_else(|| "no codec factory declared".to_owned());
            return Err(CodecError::GenerationSkipped {
                type_name: shape.type_name,
                reason,
            });
        };

        let assembler = V::assembler();
        let staged = matches!(assembler, Assembler::Staged(_));
        if staged != schema.uses_staged_construction {
            let reason = if staged {
                "binds a staged assembler but its schema uses direct construction"
            } else {
                "requires staged construction but binds a direct assembler"
            };
            return Err(CodecError::AssemblyMismatch {
                type_name: schema.type_name,
                reason: reason.to_owned(),
            });
        }

        let record = RecordCodec::synthesize(&schema, registry, witness.as_ref())?;
        Ok(Self { record, assembler })
    }

    /// A shareable dynamic clone of the underlying record codec, suitable
    /// for registration so this value type can nest inside others.
    #[must_use]
    pub fn dynamic(&self) -> RecordCodec {
        self.record.clone()
    }

    /// Overrides the fill-in default for one property.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownProperty`] for an unrecognized name.
    pub fn set_default(&mut self, property: &str, value: Value) -> Result<(), CodecError> {
        self.record.set_default(property, value)
    }

    /// Encodes a value (or absence, as a JSON null) to a compact string.
    ///
    /// # Errors
    ///
    /// Propagates sub-codec and stream failures.
    pub fn encode(&self, value: Option<&V>) -> Result<String, CodecError> {
        let mut writer = JsonWriter::new();
        self.encode_to(value, &mut writer)?;
        writer.into_string()
    }

    /// Encodes onto an existing writer.
    ///
    /// # Errors
    ///
    /// Propagates sub-codec and stream failures.
    pub fn encode_to(&self, value: Option<&V>, writer: &mut JsonWriter) -> Result<(), CodecError> {
        match value {
            None => writer.write_null(),
            Some(value) => {
                let entries = self
                    .record
                    .properties
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.readable)
                    .filter_map(|(ordinal, p)| {
                        value.read_property(ordinal).map(|v| (p.name.clone(), v))
                    })
                    .collect();
                self.record.encode(&Value::Map(entries), writer)
            }
        }
    }

    /// Decodes a complete JSON document into a value, or `None` for null.
    ///
    /// # Errors
    ///
    /// Propagates stream failures and typed-assembly conversion failures.
    pub fn decode(&self, input: &str) -> Result<Option<V>, CodecError> {
        let mut reader = JsonReader::new(input)?;
        let value = self.decode_from(&mut reader)?;
        reader.expect_end()?;
        Ok(value)
    }

    /// Decodes from an existing reader.
    ///
    /// # Errors
    ///
    /// As [`ValueCodec::decode`].
    pub fn decode_from(&self, reader: &mut JsonReader) -> Result<Option<V>, CodecError> {
        match self.record.decode(reader)? {
            Value::Null => Ok(None),
            Value::Map(entries) => self.assemble(entries).map(Some),
            other => Err(CodecError::mismatch("record slot map", &other)),
        }
    }

    fn assemble(&self, entries: Vec<(String, Value)>) -> Result<V, CodecError> {
        let slots: Vec<Value> = entries.into_iter().map(|(_, slot)| slot).collect();
        match &self.assembler {
            Assembler::Direct(construct) => construct(slots),
            Assembler::Staged(open) => {
                let mut stage = open();
                for (ordinal, slot) in slots.into_iter().enumerate() {
                    stage.set(ordinal, slot)?;
                }
                stage.finish()
            }
        }
    }
}

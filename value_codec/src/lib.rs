//! Core crate for the `value_codec` serialization framework.
//!
//! The crate synthesizes a JSON codec for an immutable value type from its
//! declared shape: an ordered property schema with wire names, alternates,
//! and per-category defaults, generic instantiation through an explicit
//! type witness, and construction either by a single multi-argument
//! assembly or a staged setter chain. Shapes are supplied by a schema
//! provider rather than runtime reflection; the companion
//! `value_codec_macros` crate derives them from plain structs.
//!
//! Property scalars are the types with built-in codecs and [`ToValue`]/
//! [`FromValue`] conversions: `i8` through `i64`, `u8` through `u32`,
//! `f32`/`f64`, `bool`, `char`, and `String`. Integer slots normalize to
//! `i64`, so `u64`, `usize`, and `isize` are not supported as property
//! types.
//!
//! ```rust
//! use value_codec::{CodecRegistry, ValueCodec, ValueRecord};
//!
//! #[derive(Debug, PartialEq, Clone, ValueRecord)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> Result<(), value_codec::CodecError> {
//! let registry = CodecRegistry::new();
//! let codec: ValueCodec<Person> = ValueCodec::new(&registry)?;
//! let person = Person { name: "Ada".into(), age: 36 };
//! let json = codec.encode(Some(&person))?;
//! assert_eq!(json, r#"{"name":"Ada","age":36}"#);
//! assert_eq!(codec.decode(&json)?, Some(person));
//! # Ok(())
//! # }
//! ```

pub use value_codec_macros::ValueRecord;

pub mod codec;
mod descriptor;
mod error;
mod generate;
mod record;
mod registry;
pub mod schema;
mod shape;
pub mod stream;
mod value;

pub use descriptor::{TypeDescriptor, TypeWitness};
pub use error::CodecError;
pub use generate::{Diagnostics, generate, validate_factory};
pub use record::{RecordCodec, ValueCodec};
pub use registry::CodecRegistry;
pub use shape::{AccessorDecl, CODEC_TYPE_NAME, DeclaredShape, FactoryDecl, StagedSetterDecl};
pub use value::{FromValue, ToValue, Value};

/// The binding between a concrete value type and the dynamic slot model.
///
/// Implementations are normally derived. `declared_shape` is the schema
/// provider's report; `read_property` renders one property as a dynamic
/// value (`None` for setter-only properties, which have no read path); and
/// `assembler` supplies the construction strategy.
pub trait ValueRecord: Sized {
    /// The value type's declared surface, described once.
    fn declared_shape() -> DeclaredShape;

    /// Reads the property at `ordinal` as a dynamic value.
    fn read_property(&self, ordinal: usize) -> Option<Value>;

    /// The construction strategy for decoded slots.
    fn assembler() -> Assembler<Self>;
}

/// How decoded slots become a value: one multi-argument construction, or a
/// staged setter chain ending in a build step.
pub enum Assembler<V> {
    /// Construct in one call from all slots in ordinal order.
    Direct(fn(Vec<Value>) -> Result<V, CodecError>),
    /// Open a staging record, set every slot sequentially, then build.
    Staged(fn() -> Box<dyn Stage<V>>),
}

/// A staging record for builder-style construction.
pub trait Stage<V> {
    /// Stores the slot for the property at `ordinal`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Assembly`] when the slot cannot be converted.
    fn set(&mut self, ordinal: usize, slot: Value) -> Result<(), CodecError>;

    /// Builds the final value from the staged slots.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Assembly`] when required state is missing.
    fn finish(self: Box<Self>) -> Result<V, CodecError>;
}

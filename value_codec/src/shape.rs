//! Declared shape of a value type, as reported by a schema provider.
//!
//! The generator never reflects over live types. A host-side collaborator
//! (in this workspace, the `#[derive(ValueRecord)]` macro; in tests, plain
//! builder calls) describes the value type once: its accessors, any
//! staged-construction setters, its formal type parameters, and the codec
//! factory it exposes. Everything downstream works from this description.

use crate::descriptor::TypeDescriptor;

/// Name under which generated codecs appear in factory return types.
pub const CODEC_TYPE_NAME: &str = "ValueCodec";

/// The declared surface of one value type.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredShape {
    /// Value type name.
    pub type_name: String,
    /// Formal type parameter names, in declaration order.
    pub formal_parameters: Vec<String>,
    /// Property accessors, in declaration order.
    pub accessors: Vec<AccessorDecl>,
    /// Setters on the staged-construction helper, if one exists.
    pub staged_setters: Vec<StagedSetterDecl>,
    /// The static codec factory, if the value type declares one.
    pub factory: Option<FactoryDecl>,
}

impl DeclaredShape {
    /// Starts a shape for the named value type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            formal_parameters: Vec::new(),
            accessors: Vec::new(),
            staged_setters: Vec::new(),
            factory: None,
        }
    }

    /// Appends a formal type parameter.
    #[must_use]
    pub fn with_formal_parameter(mut self, name: impl Into<String>) -> Self {
        self.formal_parameters.push(name.into());
        self
    }

    /// Appends a property accessor.
    #[must_use]
    pub fn with_accessor(mut self, accessor: AccessorDecl) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Appends a staged-construction setter.
    #[must_use]
    pub fn with_staged_setter(mut self, setter: StagedSetterDecl) -> Self {
        self.staged_setters.push(setter);
        self
    }

    /// Declares the codec factory.
    #[must_use]
    pub fn with_factory(mut self, factory: FactoryDecl) -> Self {
        self.factory = Some(factory);
        self
    }
}

/// One property accessor on the value type.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorDecl {
    /// Accessor name as declared; conventional `get`/`is` prefixes are
    /// stripped during extraction.
    pub name: String,
    /// Declared type, preserving formal-parameter references.
    pub declared_type: TypeDescriptor,
    /// Whether the property admits null.
    pub nullable: bool,
    /// Explicit primary wire name, overriding the property name.
    pub wire_name: Option<String>,
    /// Explicit decode-only synonyms.
    pub alternate_wire_names: Vec<String>,
}

impl AccessorDecl {
    /// An accessor with no naming overrides.
    pub fn new(name: impl Into<String>, declared_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            declared_type,
            nullable: false,
            wire_name: None,
            alternate_wire_names: Vec::new(),
        }
    }

    /// Marks the property nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Overrides the primary wire name.
    #[must_use]
    pub fn with_wire_name(mut self, name: impl Into<String>) -> Self {
        self.wire_name = Some(name.into());
        self
    }

    /// Adds a decode-only alternate wire name.
    #[must_use]
    pub fn with_alternate(mut self, name: impl Into<String>) -> Self {
        self.alternate_wire_names.push(name.into());
        self
    }
}

/// One setter on the staged-construction helper.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedSetterDecl {
    /// Setter name; matched against property names after prefix stripping.
    pub name: String,
    /// Declared parameter type.
    pub declared_type: TypeDescriptor,
    /// Whether the setter accepts null.
    pub nullable: bool,
}

impl StagedSetterDecl {
    /// A setter declaration.
    pub fn new(name: impl Into<String>, declared_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            declared_type,
            nullable: false,
        }
    }

    /// Marks the setter as accepting null.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// The declared signature of a static codec factory.
#[derive(Debug, Clone, PartialEq)]
pub struct FactoryDecl {
    /// Factory method name.
    pub name: String,
    /// Declared return type.
    pub return_type: TypeDescriptor,
    /// Whether the factory also accepts a type witness (generic value types).
    pub accepts_witness: bool,
}

impl FactoryDecl {
    /// A factory with an explicit return type.
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            return_type,
            accepts_witness: false,
        }
    }

    /// The well-formed factory for a value type: returns
    /// `ValueCodec<TypeName>` and accepts a witness when generic.
    pub fn for_value_type(type_name: impl Into<String>, generic: bool) -> Self {
        Self {
            name: "codec".to_owned(),
            return_type: TypeDescriptor::parameterized(
                CODEC_TYPE_NAME,
                vec![TypeDescriptor::named(type_name)],
            ),
            accepts_witness: generic,
        }
    }

    /// Marks the factory as accepting a type witness.
    #[must_use]
    pub fn with_witness_parameter(mut self) -> Self {
        self.accepts_witness = true;
        self
    }
}

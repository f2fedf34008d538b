//! Recursive descriptors for declared property types.
//!
//! A [`TypeDescriptor`] stands in for a property's declared type without any
//! runtime reflection: either a concrete named type with ordered type
//! arguments, or a positional reference to one of the enclosing value type's
//! own formal parameters. Generic instantiation is a pure substitution walk
//! over the tree, driven by a [`TypeWitness`] supplied when the codec is
//! constructed.

use std::fmt;

use crate::error::CodecError;


/// A declared type, preserving formal-parameter references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// A concrete named type and its ordered type arguments (empty for
    /// non-parameterized types).
    Concrete {
        /// Type name as it appears in the sub-codec registry.
        name: String,
        /// Ordered child descriptors.
        args: Vec<TypeDescriptor>,
    },
    /// A reference to the enclosing value type's formal parameter at the
    /// given declaration index.
    Parameter(usize),
}

impl TypeDescriptor {
    /// A concrete type without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Concrete {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A concrete container type with the given type arguments.
    pub fn parameterized(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Concrete {
            name: name.into(),
            args,
        }
    }

    /// A formal-parameter reference by declaration index.
    #[must_use]
    pub fn parameter(index: usize) -> Self {
        Self::Parameter(index)
    }

    /// Root type name for concrete descriptors.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Concrete { name, .. } => Some(name),
            Self::Parameter(_) => None,
        }
    }

    /// Whether this tree mentions a formal parameter at any depth.
    #[must_use]
    pub fn references_parameter(&self) -> bool {
        match self {
            Self::Parameter(_) => true,
            Self::Concrete { args, .. } => args.iter().any(Self::references_parameter),
        }
    }

    /// Replaces every formal-parameter node with the corresponding witness
    /// entry, preserving container structure and concrete nodes unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnresolvedParameter`] when a parameter index
    /// exceeds the witness.
    pub fn substitute(
        &self,
        witness: &TypeWitness,
        type_name: &str,
    ) -> Result<Self, CodecError> {
        match self {
            Self::Parameter(index) => witness.get(*index).cloned().ok_or_else(|| {
                CodecError::UnresolvedParameter {
                    index: *index,
                    type_name: type_name.to_owned(),
                }
            }),
            Self::Concrete { name, args } => {
                let args = args
                    .iter()
                    .map(|arg| arg.substitute(witness, type_name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Concrete {
                    name: name.clone(),
                    args,
                })
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(index) => write!(f, "#{index}"),
            Self::Concrete { name, args } => {
                write!(f, "{name}")?;
                if let Some((first, rest)) = args.split_first() {
                    write!(f, "<{first}")?;
                    for arg in rest {
                        write!(f, ", {arg}")?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
        }
    }
}

/// A fully applied generic instantiation: one concrete descriptor per formal
/// parameter, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeWitness {
    entries: Vec<TypeDescriptor>,
}

impl TypeWitness {
    /// Builds a witness from concrete descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnresolvedParameter`] when an entry itself still
    /// references a formal parameter; witnesses must be fully concrete.
    pub fn new(entries: Vec<TypeDescriptor>) -> Result<Self, CodecError> {
        if let Some((index, _)) = entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.references_parameter())
        {
            return Err(CodecError::UnresolvedParameter {
                index,
                type_name: "<witness>".to_owned(),
            });
        }
        Ok(Self { entries })
    }

    /// Witness entry for the formal parameter at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TypeDescriptor> {
        self.entries.get(index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the witness is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

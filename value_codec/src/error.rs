//! Primary error enum for codec synthesis and runtime encode/decode flows.

use thiserror::Error;

/// Errors that can occur while synthesizing a codec or moving values across
/// the wire.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The input text was not well-formed JSON.
    #[error("malformed JSON input: {0}")]
    Parse(#[from] serde_json::Error),

    /// The stream held a different token than the caller asked for.
    #[error("expected {expected} while {context}, found {found}")]
    UnexpectedToken {
        /// Token kind the caller asked the stream for.
        expected: &'static str,
        /// What the stream actually held.
        found: String,
        /// Operation that was underway.
        context: &'static str,
    },

    /// A sub-codec received a value of the wrong shape.
    #[error("value mismatch: expected {expected}, found {found}")]
    Mismatch {
        /// Shape the codec encodes.
        expected: &'static str,
        /// Debug rendering of the offending value.
        found: String,
    },

    /// No codec is registered for a wire type.
    #[error("no codec registered for type `{0}`")]
    UnknownType(String),

    /// A declared type still references a formal parameter after resolution.
    #[error("type parameter #{index} of `{type_name}` is not satisfied by the supplied witness")]
    UnresolvedParameter {
        /// Positional index of the formal parameter.
        index: usize,
        /// Value type that declared the parameter.
        type_name: String,
    },

    /// The witness does not match the value type's formal parameter list.
    #[error("`{type_name}` declares {declared} type parameter(s) but the witness supplies {supplied}")]
    WitnessArity {
        /// Value type being instantiated.
        type_name: String,
        /// Number of formal parameters on the value type.
        declared: usize,
        /// Number of descriptors in the witness.
        supplied: usize,
    },

    /// Two properties claim the same wire name.
    #[error("wire name `{name}` on `{type_name}` is claimed by both `{first}` and `{second}`")]
    DuplicateWireName {
        /// The contested wire name.
        name: String,
        /// Value type whose schema collided.
        type_name: String,
        /// Property that claimed the name first.
        first: String,
        /// Property that claimed it again.
        second: String,
    },

    /// The factory validator rejected (or found no) codec factory.
    #[error("codec generation for `{type_name}` was skipped: {reason}")]
    GenerationSkipped {
        /// Value type whose generation was suppressed.
        type_name: String,
        /// Why the validator declined.
        reason: String,
    },

    /// A codec method was asked about a property the schema does not hold.
    #[error("`{type_name}` has no property named `{property}`")]
    UnknownProperty {
        /// Value type owning the schema.
        type_name: String,
        /// The missing property name.
        property: String,
    },

    /// The binding's assembler disagrees with the schema's construction mode.
    #[error("`{type_name}` {reason}")]
    AssemblyMismatch {
        /// Value type being assembled.
        type_name: String,
        /// Description of the disagreement.
        reason: String,
    },

    /// Typed assembly could not convert a decoded slot.
    #[error("cannot assemble property `{property}`: {reason}")]
    Assembly {
        /// Property whose slot failed conversion.
        property: String,
        /// Description of the conversion failure.
        reason: String,
    },

    /// A non-finite float has no JSON representation.
    #[error("non-finite float {0} cannot be encoded as JSON")]
    NonFiniteFloat(f64),
}

impl CodecError {
    /// Shorthand for a [`CodecError::Mismatch`] built from a live value.
    pub(crate) fn mismatch(expected: &'static str, found: &impl std::fmt::Debug) -> Self {
        Self::Mismatch {
            expected,
            found: format!("{found:?}"),
        }
    }
}

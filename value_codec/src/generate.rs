//! The generation pipeline and its gatekeeper.
//!
//! Generation problems are diagnostics, never hard failures: an absent or
//! invalid factory simply suppresses codec generation for that value type
//! and the host proceeds. Warnings go to the [`Diagnostics`] sink and are
//! mirrored to `tracing` so hosts with a subscriber see them in build logs.

use tracing::warn;

use crate::descriptor::TypeDescriptor;
use crate::schema::{self, Schema};
use crate::shape::{CODEC_TYPE_NAME, DeclaredShape};

/// Collected generation-time warnings for one value type.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<String>,
}

impl Diagnostics {
    /// An empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning and mirrors it to `tracing`.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.warnings.push(message);
    }

    /// All warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether no warnings were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Runs the generation pass for one value type: factory validation, then
/// schema extraction. Returns `None` when generation is suppressed.
pub fn generate(shape: &DeclaredShape, diagnostics: &mut Diagnostics) -> Option<Schema> {
    validate_factory(shape, diagnostics).then(|| schema::extract(shape))
}

/// Gates generation on a recognized codec factory.
///
/// No factory, or a factory returning something other than a codec, skips
/// silently. A codec return type with no type argument, one whose type
/// argument is not the enclosing value type, or a generic value type whose
/// factory takes no witness parameter, skips with a warning.
pub fn validate_factory(shape: &DeclaredShape, diagnostics: &mut Diagnostics) -> bool {
    let Some(factory) = &shape.factory else {
        return false;
    };
    let TypeDescriptor::Concrete { name, args } = &factory.return_type else {
        return false;
    };
    if name != CODEC_TYPE_NAME {
        return false;
    }
    let Some(subject) = args.first() else {
        diagnostics.warn(format!(
            "found factory `{}` on `{}` returning {CODEC_TYPE_NAME} with no type arguments, \
             skipping codec generation",
            factory.name, shape.type_name,
        ));
        return false;
    };
    if subject.name() != Some(shape.type_name.as_str()) {
        diagnostics.warn(format!(
            "found factory `{}` returning {CODEC_TYPE_NAME}<{subject}> on `{}`, \
             skipping codec generation",
            factory.name, shape.type_name,
        ));
        return false;
    }
    if !shape.formal_parameters.is_empty() && !factory.accepts_witness {
        diagnostics.warn(format!(
            "found factory `{}` on generic `{}` without a type witness parameter, \
             skipping codec generation",
            factory.name, shape.type_name,
        ));
        return false;
    }
    true
}

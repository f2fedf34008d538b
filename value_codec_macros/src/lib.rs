//! Procedural macros for `value_codec`.
//!
//! The [`ValueRecord`] derive is the host-side schema provider: it inspects
//! a struct's fields once at compile time and emits the declared shape
//! (property names, descriptor trees, nullability, naming overrides) plus
//! the typed read/assemble bindings the codec synthesizer consumes. Wire
//! naming can be overridden per field:
//!
//! ```rust,ignore
//! #[derive(ValueRecord)]
//! struct Ticket {
//!     #[codec(rename = "_ID", alternate = "id", alternate = "ticket_id")]
//!     id: String,
//!     seat: Option<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `value_codec::ValueRecord`.
#[proc_macro_derive(ValueRecord, attributes(codec))]
pub fn derive_value_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

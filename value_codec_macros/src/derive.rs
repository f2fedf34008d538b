//! Expansion pipeline for the `ValueRecord` derive.

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

mod build;
mod parse;
mod types;

/// Expands the derive input into a `ValueRecord` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let record = parse::parse_input(input)?;

    let declared_shape = build::declared_shape(&record);
    let read_property = build::read_property(&record);
    let assembler = build::assembler(&record);

    let ident = &record.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();
    let where_clause = build::where_clause(input);

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::value_codec::ValueRecord for #ident #ty_generics #where_clause {
            fn declared_shape() -> ::value_codec::DeclaredShape {
                #declared_shape
            }

            fn read_property(&self, ordinal: usize) -> ::core::option::Option<::value_codec::Value> {
                #read_property
            }

            fn assembler() -> ::value_codec::Assembler<Self> {
                #assembler
            }
        }
    })
}

//! Token construction for each `ValueRecord` method body.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::DeriveInput;

use super::parse::RecordInput;

/// Builds the `declared_shape` body: the builder chain describing the
/// value type's accessors, formal parameters, and codec factory.
pub(crate) fn declared_shape(record: &RecordInput) -> TokenStream {
    let type_name = record.ident.to_string();
    let mut chain = quote! { ::value_codec::DeclaredShape::new(#type_name) };

    for param in &record.params {
        let name = param.to_string();
        chain.extend(quote! { .with_formal_parameter(#name) });
    }

    for field in &record.fields {
        let name = field.ident.to_string();
        let descriptor = &field.ty.descriptor;
        let mut accessor = quote! { ::value_codec::AccessorDecl::new(#name, #descriptor,) };
        if field.ty.nullable {
            accessor.extend(quote! { .nullable() });
        }
        if let Some(rename) = &field.attrs.rename {
            accessor.extend(quote! { .with_wire_name(#rename) });
        }
        for alternate in &field.attrs.alternates {
            accessor.extend(quote! { .with_alternate(#alternate) });
        }
        chain.extend(quote! { .with_accessor(#accessor) });
    }

    let generic = !record.params.is_empty();
    chain.extend(quote! {
        .with_factory(::value_codec::FactoryDecl::for_value_type(#type_name, #generic))
    });
    chain
}

/// Builds the `read_property` body: a match over property ordinals.
pub(crate) fn read_property(record: &RecordInput) -> TokenStream {
    let arms = record.fields.iter().enumerate().map(|(ordinal, field)| {
        let ordinal = Literal::usize_suffixed(ordinal);
        let ident = &field.ident;
        quote! {
            #ordinal => ::core::option::Option::Some(
                ::value_codec::ToValue::to_value(&self.#ident),
            ),
        }
    });
    quote! {
        match ordinal {
            #(#arms)*
            _ => ::core::option::Option::None,
        }
    }
}

/// Builds the `assembler` body: a direct construction from decoded slots
/// in ordinal order.
pub(crate) fn assembler(record: &RecordInput) -> TokenStream {
    let bindings = record.fields.iter().map(|field| {
        let ident = &field.ident;
        let name = field.ident.to_string();
        quote! {
            #ident: ::value_codec::FromValue::from_value(
                slots.next().ok_or_else(|| ::value_codec::CodecError::Assembly {
                    property: #name.to_owned(),
                    reason: "slot missing".to_owned(),
                })?,
            )?,
        }
    });
    quote! {
        ::value_codec::Assembler::Direct(|slots| {
            let mut slots = slots.into_iter();
            ::core::result::Result::Ok(Self {
                #(#bindings)*
            })
        })
    }
}

/// Builds the impl's where clause, carrying any caller predicates and
/// bounding every type parameter by the dynamic value conversions.
pub(crate) fn where_clause(input: &DeriveInput) -> TokenStream {
    let mut predicates: Vec<TokenStream> = input
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter().map(|p| quote! { #p }).collect())
        .unwrap_or_default();

    for param in input.generics.type_params() {
        let ident = &param.ident;
        predicates.push(quote! {
            #ident: ::value_codec::ToValue + ::value_codec::FromValue
        });
    }

    if predicates.is_empty() {
        TokenStream::new()
    } else {
        quote! { where #(#predicates),* }
    }
}

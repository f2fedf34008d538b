//! Mapping from Rust field types to declared type descriptors.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// A field's resolved descriptor shape.
///
/// `descriptor` is an expression evaluating to a
/// `::value_codec::TypeDescriptor`; a top-level `Option` is peeled off
/// into `nullable` so the descriptor always names the payload type.
#[derive(Debug)]
pub(crate) struct FieldType {
    pub nullable: bool,
    pub descriptor: TokenStream,
}

/// Resolves a field type, treating a top-level `Option<T>` as a nullable `T`.
pub(crate) fn resolve(ty: &Type, params: &[Ident]) -> syn::Result<FieldType> {
    if let Some(inner) = option_payload(ty)? {
        return Ok(FieldType {
            nullable: true,
            descriptor: descriptor_expr(inner, params)?,
        });
    }
    Ok(FieldType {
        nullable: false,
        descriptor: descriptor_expr(ty, params)?,
    })
}

/// Returns the payload type when `ty` is `Option<T>`.
fn option_payload(ty: &Type) -> syn::Result<Option<&Type>> {
    let Type::Path(path) = ty else {
        return Ok(None);
    };
    let Some(segment) = path.path.segments.last() else {
        return Ok(None);
    };
    if segment.ident != "Option" {
        return Ok(None);
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Err(syn::Error::new_spanned(ty, "Option requires a type argument"));
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let (Some(inner), None) = (types.next(), types.next()) else {
        return Err(syn::Error::new_spanned(
            ty,
            "Option requires exactly one type argument",
        ));
    };
    Ok(Some(inner))
}

/// Builds the `TypeDescriptor` expression for a payload type.
fn descriptor_expr(ty: &Type, params: &[Ident]) -> syn::Result<TokenStream> {
    let Type::Path(path) = ty else {
        return Err(syn::Error::new_spanned(
            ty,
            "unsupported field type; expected a path type such as `String`, \
             `Vec<T>`, or a type parameter",
        ));
    };
    let Some(segment) = path.path.segments.last() else {
        return Err(syn::Error::new_spanned(ty, "empty type path"));
    };

    if path.path.segments.len() == 1
        && segment.arguments.is_none()
        && let Some(index) = params.iter().position(|p| *p == segment.ident)
    {
        return Ok(quote! { ::value_codec::TypeDescriptor::parameter(#index) });
    }

    if segment.ident == "Option" {
        return Err(syn::Error::new_spanned(
            ty,
            "Option is only supported at the top level of a field",
        ));
    }

    let name = segment.ident.to_string();
    match &segment.arguments {
        PathArguments::None => Ok(quote! { ::value_codec::TypeDescriptor::named(#name) }),
        PathArguments::AngleBracketed(args) => {
            let mut arg_exprs = Vec::new();
            for arg in &args.args {
                match arg {
                    GenericArgument::Type(inner) => {
                        arg_exprs.push(descriptor_expr(inner, params)?);
                    }
                    GenericArgument::Lifetime(_) => {
                        return Err(syn::Error::new_spanned(
                            arg,
                            "value record fields cannot borrow",
                        ));
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "unsupported generic argument",
                        ));
                    }
                }
            }
            Ok(quote! {
                ::value_codec::TypeDescriptor::parameterized(
                    #name,
                    ::std::vec![#(#arg_exprs),*],
                )
            })
        }
        PathArguments::Parenthesized(_) => Err(syn::Error::new_spanned(
            ty,
            "function types are not value record fields",
        )),
    }
}

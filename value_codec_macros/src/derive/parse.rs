//! Parsing of the derive input and `#[codec(...)]` field attributes.

use syn::{Attribute, Data, DeriveInput, Fields, Ident};

use super::types::{self, FieldType};

/// Field-level attributes recognized by `#[derive(ValueRecord)]`.
///
/// - `rename` overrides the primary wire name.
/// - `alternate` (repeatable) adds decode-only synonyms.
#[derive(Debug, Default)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub alternates: Vec<String>,
}

/// One named field, with its resolved descriptor shape.
#[derive(Debug)]
pub(crate) struct RecordField {
    pub ident: Ident,
    pub ty: FieldType,
    pub attrs: FieldAttrs,
}

/// The parsed derive input.
#[derive(Debug)]
pub(crate) struct RecordInput {
    pub ident: Ident,
    /// Formal type parameter names, in declaration order.
    pub params: Vec<Ident>,
    pub fields: Vec<RecordField>,
}

/// Iterates all `#[codec(...)]` attributes once and applies a callback.
fn parse_codec_attrs<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta<'_>) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("codec")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    parse_codec_attrs(attrs, |meta| {
        if meta.path.is_ident("rename") {
            let value: syn::LitStr = meta.value()?.parse()?;
            parsed.rename = Some(value.value());
            Ok(())
        } else if meta.path.is_ident("alternate") {
            let value: syn::LitStr = meta.value()?.parse()?;
            parsed.alternates.push(value.value());
            Ok(())
        } else {
            Err(meta.error("unknown codec attribute; expected `rename` or `alternate`"))
        }
    })?;
    Ok(parsed)
}

/// Parses the derive input into a [`RecordInput`].
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ValueRecord can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "ValueRecord requires named fields",
        ));
    };

    let params: Vec<Ident> = input
        .generics
        .type_params()
        .map(|p| p.ident.clone())
        .collect();
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "ValueRecord value types cannot borrow",
        ));
    }

    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "ValueRecord requires named fields"))?;
        let ty = types::resolve(&field.ty, &params)?;
        let attrs = parse_field_attrs(&field.attrs)?;
        fields.push(RecordField { ident, ty, attrs });
    }

    Ok(RecordInput {
        ident: input.ident.clone(),
        params,
        fields,
    })
}

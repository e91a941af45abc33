//! Common parsing utilities
//!
//! Shared helpers for reading type definitions in derive input.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Fields, Ident};

// =============================================================================
// Enum Representation
// =============================================================================

/// Integer reprs accepted on field-less enums, mapped to `Primitive` variants.
const INTEGER_REPRS: &[(&str, &str)] = &[
    ("i8", "I8"),
    ("i16", "I16"),
    ("i32", "I32"),
    ("i64", "I64"),
    ("i128", "I128"),
    ("isize", "Isize"),
    ("u8", "U8"),
    ("u16", "U16"),
    ("u32", "U32"),
    ("u64", "U64"),
    ("u128", "U128"),
    ("usize", "Usize"),
];

/// Discriminant representation of a field-less enum as a `Primitive` variant.
///
/// `#[repr(u8)]` and `#[repr(C, u8)]` pick the integer, bare `#[repr(C)]`
/// is a C `int`, and no repr at all falls back to `isize`.
pub fn enum_repr(attrs: &[Attribute]) -> syn::Result<Ident> {
    let mut repr = None;
    let mut is_c = false;

    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("C") {
                is_c = true;
                return Ok(());
            }
            for (name, variant) in INTEGER_REPRS {
                if meta.path.is_ident(name) {
                    repr = Some(*variant);
                    return Ok(());
                }
            }
            // align(N), packed, transparent: irrelevant to the discriminant
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }

    let variant = match (repr, is_c) {
        (Some(v), _) => v,
        (None, true) => "I32",
        (None, false) => "Isize",
    };
    Ok(Ident::new(variant, proc_macro2::Span::call_site()))
}

// =============================================================================
// Field Lists
// =============================================================================

/// `FieldDescriptor::new(..)` entries for every declared field.
///
/// Named fields keep their identifier, tuple fields use their index.
/// `prefix` qualifies names with a variant, e.g. `"Circle.radius"`.
pub fn field_entries(fields: &Fields, prefix: Option<&Ident>) -> Vec<TokenStream> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let name = match &field.ident {
                Some(ident) => ident.to_string(),
                None => index.to_string(),
            };
            let name = match prefix {
                Some(variant) => format!("{}.{}", variant, name),
                None => name,
            };
            let ty = &field.ty;
            quote! {
                ::tola_sort::layout::FieldDescriptor::new(
                    #name,
                    <#ty as ::tola_sort::layout::Layout>::DESCRIPTOR,
                )
            }
        })
        .collect()
}

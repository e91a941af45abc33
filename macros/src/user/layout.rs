//! `#[derive(Layout)]`
//!
//! Emits a `Layout` impl whose descriptor lists every declared field, so
//! the classifier can walk the type without runtime reflection.
//!
//! | Input | Descriptor kind |
//! |-------|-----------------|
//! | struct / tuple struct / unit struct | `TypeKind::Struct` |
//! | enum, all variants unit | `TypeKind::Enum(repr)` |
//! | enum with payloads | `TypeKind::Variants` (fields flattened) |
//! | union | rejected |

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields};

use crate::common::{enum_repr, field_entries};

pub fn expand_derive_layout(input: DeriveInput) -> TokenStream {
    try_expand(input).unwrap_or_else(|err| err.to_compile_error())
}

fn try_expand(input: DeriveInput) -> syn::Result<TokenStream> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Layout describes 'static types; lifetime parameters are not supported",
        ));
    }

    let name = &input.ident;
    let name_str = name.to_string();

    let kind = match &input.data {
        Data::Struct(data) => {
            let fields = field_entries(&data.fields, None);
            quote! { ::tola_sort::layout::TypeKind::Struct(&[#(#fields),*]) }
        }
        Data::Enum(data) => {
            let field_less = data.variants.iter().all(|v| matches!(v.fields, Fields::Unit));
            if field_less {
                let repr = enum_repr(&input.attrs)?;
                quote! {
                    ::tola_sort::layout::TypeKind::Enum(::tola_sort::layout::Primitive::#repr)
                }
            } else {
                let fields: Vec<_> = data
                    .variants
                    .iter()
                    .flat_map(|v| field_entries(&v.fields, Some(&v.ident)))
                    .collect();
                quote! { ::tola_sort::layout::TypeKind::Variants(&[#(#fields),*]) }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Layout cannot be derived for unions: the active field is unknown",
            ));
        }
    };

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::tola_sort::layout::Layout));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tola_sort::layout::Layout for #name #ty_generics #where_clause {
            const DESCRIPTOR: &'static ::tola_sort::layout::TypeDescriptor =
                &::tola_sort::layout::TypeDescriptor::new(
                    #name_str,
                    ::core::mem::size_of::<Self>(),
                    ::core::any::TypeId::of::<Self>,
                    #kind,
                );
        }
    })
}

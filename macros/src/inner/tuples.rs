//! Tuple `Layout` impl generation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct TupleInput {
    pub max: usize,
}

impl Parse for TupleInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(TupleInput { max })
    }
}

/// `(A0,)` through `(A0, .., A{max-1})`, fields named `"0"`, `"1"`, ...
pub fn expand_tuple_layouts(input: TupleInput) -> TokenStream {
    let mut impls = Vec::new();

    for arity in 1..=input.max {
        let params: Vec<_> = (0..arity).map(|i| format_ident!("A{}", i)).collect();
        let names: Vec<_> = (0..arity).map(|i| i.to_string()).collect();

        impls.push(quote! {
            impl<#(#params: ::tola_sort::layout::Layout),*> ::tola_sort::layout::Layout for (#(#params,)*) {
                const DESCRIPTOR: &'static ::tola_sort::layout::TypeDescriptor =
                    &::tola_sort::layout::TypeDescriptor::composite(
                        "tuple",
                        ::core::mem::size_of::<Self>(),
                        ::core::any::TypeId::of::<Self>,
                        &[#(::tola_sort::layout::FieldDescriptor::new(#names, #params::DESCRIPTOR)),*],
                    );
            }
        });
    }

    quote! { #(#impls)* }
}

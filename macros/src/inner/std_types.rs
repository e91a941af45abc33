//! Standard library type tables for `Layout` impl generation.

use proc_macro2::TokenStream;
use quote::quote;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// `Primitive::<variant>`
    Primitive(&'static str),
    /// `core::num::NonZero*`, described as its underlying `Primitive::<variant>`
    NonZero(&'static str),
    Pointer,
    /// `ReferenceKind::<variant>`
    Reference(&'static str),
    /// No declared fields (`()`, `PhantomData<T>`).
    Empty,
}

use LayoutKind::*;

/// Primitive types (always available).
pub const PRIMITIVE_TYPES: &[(&str, LayoutKind)] = &[
    ("bool", Primitive("Bool")),
    ("char", Primitive("Char")),

    // Signed integers
    ("i8", Primitive("I8")),
    ("i16", Primitive("I16")),
    ("i32", Primitive("I32")),
    ("i64", Primitive("I64")),
    ("i128", Primitive("I128")),
    ("isize", Primitive("Isize")),

    // Unsigned integers
    ("u8", Primitive("U8")),
    ("u16", Primitive("U16")),
    ("u32", Primitive("U32")),
    ("u64", Primitive("U64")),
    ("u128", Primitive("U128")),
    ("usize", Primitive("Usize")),

    // Floats
    ("f32", Primitive("F32")),
    ("f64", Primitive("F64")),

    // NonZero
    ("core::num::NonZeroU8", NonZero("U8")),
    ("core::num::NonZeroU16", NonZero("U16")),
    ("core::num::NonZeroU32", NonZero("U32")),
    ("core::num::NonZeroU64", NonZero("U64")),
    ("core::num::NonZeroU128", NonZero("U128")),
    ("core::num::NonZeroUsize", NonZero("Usize")),
    ("core::num::NonZeroI8", NonZero("I8")),
    ("core::num::NonZeroI16", NonZero("I16")),
    ("core::num::NonZeroI32", NonZero("I32")),
    ("core::num::NonZeroI64", NonZero("I64")),
    ("core::num::NonZeroI128", NonZero("I128")),
    ("core::num::NonZeroIsize", NonZero("Isize")),

    ("()", Empty),
];

/// Core generic types: (type, generics, kind).
pub const CORE_TYPES: &[(&str, &str, LayoutKind)] = &[
    // Raw pointers are untracked
    ("*const T", "T: ?Sized + 'static", Pointer),
    ("*mut T", "T: ?Sized + 'static", Pointer),

    // Borrows
    ("&'static T", "T: ?Sized + 'static", Reference("Shared")),
    ("&'static mut T", "T: ?Sized + 'static", Reference("Unique")),

    ("core::marker::PhantomData<T>", "T: ?Sized + 'static", Empty),
];

/// Alloc library types (requires "alloc" feature).
pub const ALLOC_TYPES: &[(&str, &str, LayoutKind)] = &[
    ("alloc::string::String", "", Reference("String")),
    ("alloc::vec::Vec<T>", "T: 'static", Reference("Vec")),
    ("alloc::boxed::Box<T>", "T: ?Sized + 'static", Reference("Boxed")),
    ("alloc::rc::Rc<T>", "T: ?Sized + 'static", Reference("Counted")),
    ("alloc::sync::Arc<T>", "T: ?Sized + 'static", Reference("Counted")),
];

fn kind_tokens(kind: LayoutKind) -> TokenStream {
    match kind {
        Primitive(name) | NonZero(name) => {
            let variant = syn::Ident::new(name, proc_macro2::Span::call_site());
            quote! { ::tola_sort::layout::TypeKind::Primitive(::tola_sort::layout::Primitive::#variant) }
        }
        Pointer => quote! { ::tola_sort::layout::TypeKind::Pointer },
        Reference(name) => {
            let variant = syn::Ident::new(name, proc_macro2::Span::call_site());
            quote! { ::tola_sort::layout::TypeKind::Reference(::tola_sort::layout::ReferenceKind::#variant) }
        }
        Empty => quote! { ::tola_sort::layout::TypeKind::Struct(&[]) },
    }
}

/// One `Layout` impl. `generics` is the bare parameter list, possibly empty.
fn layout_impl(path: &str, generics: &str, kind: LayoutKind) -> TokenStream {
    let ty: TokenStream = path.parse().expect("invalid type in layout table");
    let kind = kind_tokens(kind);
    let impl_generics = if generics.is_empty() {
        quote! {}
    } else {
        let params: TokenStream = generics.parse().expect("invalid generics in layout table");
        quote! { <#params> }
    };

    quote! {
        impl #impl_generics ::tola_sort::layout::Layout for #ty {
            const DESCRIPTOR: &'static ::tola_sort::layout::TypeDescriptor =
                &::tola_sort::layout::TypeDescriptor::new(
                    #path,
                    ::core::mem::size_of::<Self>(),
                    ::core::any::TypeId::of::<Self>,
                    #kind,
                );
        }
    }
}

/// Generate `Layout` impls for primitives and core generic types.
///
/// `Option<T>` and `[T; N]` carry their payload descriptor and are written
/// out by hand here.
pub fn expand_std_layouts() -> TokenStream {
    let mut impls = Vec::new();

    for (path, kind) in PRIMITIVE_TYPES {
        impls.push(layout_impl(path, "", *kind));
    }
    for (path, generics, kind) in CORE_TYPES {
        impls.push(layout_impl(path, generics, *kind));
    }

    let alloc_impls: Vec<_> = ALLOC_TYPES
        .iter()
        .map(|(path, generics, kind)| layout_impl(path, generics, *kind))
        .collect();

    quote! {
        #(#impls)*

        impl<T: ::tola_sort::layout::Layout> ::tola_sort::layout::Layout for ::core::option::Option<T> {
            const DESCRIPTOR: &'static ::tola_sort::layout::TypeDescriptor =
                &::tola_sort::layout::TypeDescriptor::new(
                    "core::option::Option<T>",
                    ::core::mem::size_of::<Self>(),
                    ::core::any::TypeId::of::<Self>,
                    ::tola_sort::layout::TypeKind::Optional(T::DESCRIPTOR),
                );
        }

        impl<T: ::tola_sort::layout::Layout, const N: usize> ::tola_sort::layout::Layout for [T; N] {
            const DESCRIPTOR: &'static ::tola_sort::layout::TypeDescriptor =
                &::tola_sort::layout::TypeDescriptor::new(
                    "[T; N]",
                    ::core::mem::size_of::<Self>(),
                    ::core::any::TypeId::of::<Self>,
                    ::tola_sort::layout::TypeKind::Array { element: T::DESCRIPTOR, len: N },
                );
        }

        #[cfg(feature = "alloc")]
        const _: () = {
            #(#alloc_impls)*
        };
    }
}

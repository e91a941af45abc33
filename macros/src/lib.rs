//! Procedural macros for tola-sort layout descriptors
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Layout)]` | struct/enum | Describe declared fields for trait classification |
//! | `define_std_layouts!()` | - | Internal: impls for primitives, core and alloc types |
//! | `define_tuple_layouts!(N)` | - | Internal: impls for tuples up to arity N |
//!
//! ## Example
//!
//! ```ignore
//! use tola_sort::prelude::*;
//!
//! #[derive(Layout)]
//! struct Point { x: i32, y: i32 }
//!
//! assert!(Point::IS_REFERENCE_FREE);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `Layout` impls for primitives, pointers, borrows, `Option`,
/// arrays and (with the `alloc` feature) owning containers.
#[proc_macro]
pub fn define_std_layouts(_input: TokenStream) -> TokenStream {
    inner::std_types::expand_std_layouts().into()
}

/// Generate `Layout` impls for tuples.
///
/// # Usage
/// ```ignore
/// define_tuple_layouts!(8);  // (A0,) .. (A0, .., A7)
/// ```
#[proc_macro]
pub fn define_tuple_layouts(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::tuples::TupleInput);
    inner::tuples::expand_tuple_layouts(input).into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive macro to describe a type's declared fields.
///
/// Every field type must itself implement `Layout`. Type parameters get a
/// `Layout` bound. Unions and lifetime-generic types are rejected.
///
/// # Usage
/// ```ignore
/// #[derive(Layout)]
/// struct Tagged { id: u64, label: String }
///
/// #[derive(Layout)]
/// #[repr(u8)]
/// enum Level { Low, High }
///
/// assert!(!Tagged::IS_REFERENCE_FREE);
/// assert!(Level::IS_BITWISE_EQUATABLE);
/// ```
#[proc_macro_derive(Layout)]
pub fn derive_layout(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_layout(input).into()
}

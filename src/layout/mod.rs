//! # Layer 0: Layout
//!
//! Structural descriptions of concrete types:
//! - `descriptor.rs`: `TypeDescriptor`, `TypeKind`, `FieldDescriptor`.
//! - `Layout`: the trait that hands out a type's descriptor.
//!
//! Impls for primitives, pointers, borrows, `Option`, arrays, tuples and the
//! alloc containers are generated here. User types use `#[derive(Layout)]`.

pub mod descriptor;

pub use descriptor::{FieldDescriptor, Primitive, ReferenceKind, TypeDescriptor, TypeKind};

/// A type with a process-lifetime structural descriptor.
pub trait Layout: 'static {
    const DESCRIPTOR: &'static TypeDescriptor;
}

macros::define_std_layouts!();
macros::define_tuple_layouts!(8);

// Internal macros used by tola-sort itself
//
// This module contains:
// - std_types: Layout impls for primitives, core and alloc types
// - tuples: Layout impls for tuples up to a given arity

pub mod std_types;
pub mod tuples;

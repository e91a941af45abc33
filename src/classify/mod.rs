//! # Layer 1: Trait Classification
//!
//! Decides two layout traits from a [`TypeDescriptor`]:
//!
//! | Trait | Meaning |
//! |-------|---------|
//! | reference-free | no borrow or owning pointer inside, raw byte copies are sound |
//! | bitwise-equatable | `==` agrees with comparing the raw bytes |
//!
//! Classification is a pure `const fn`, so [`LayoutTraits`] exposes both
//! answers as associated consts. For descriptors handled at runtime the
//! [`Classifier`] seam lets callers choose between [`Direct`] evaluation and
//! the memoising [`TraitCache`].
//!
//! ```ignore
//! use tola_sort::prelude::*;
//!
//! assert!(i32::IS_REFERENCE_FREE);
//! assert!(char::IS_BITWISE_EQUATABLE);
//! assert!(!<Option<u32>>::IS_BITWISE_EQUATABLE);
//! ```

#[cfg(feature = "std")]
pub mod cache;

#[cfg(feature = "std")]
pub use cache::{TraitCache, TraitRecord};

use crate::layout::{FieldDescriptor, Layout, TypeDescriptor, TypeKind};

// =============================================================================
// Pure Classification
// =============================================================================

/// Whether the type holds no tracked reference anywhere in its fields.
pub const fn is_reference_free(ty: &TypeDescriptor) -> bool {
    match ty.kind() {
        TypeKind::Primitive(_) | TypeKind::Enum(_) | TypeKind::Pointer => true,
        TypeKind::Reference(_) => false,
        TypeKind::Optional(inner) => is_reference_free(inner),
        TypeKind::Array { element, .. } => is_reference_free(element),
        TypeKind::Struct(fields) | TypeKind::Variants(fields) => fields_reference_free(fields),
    }
}

const fn fields_reference_free(fields: &[FieldDescriptor]) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if !is_reference_free(fields[i].ty) {
            return false;
        }
        i += 1;
    }
    true
}

/// Whether equality of two values is decided by their raw bytes.
///
/// `Option<T>` follows `T` only when the tag lives in a niche of `T`.
/// Otherwise `None` leaves the payload bytes uninitialised.
pub const fn is_bitwise_equatable(ty: &TypeDescriptor) -> bool {
    match ty.kind() {
        TypeKind::Primitive(primitive) => primitive.is_bitwise_equatable(),
        TypeKind::Enum(_) | TypeKind::Pointer => true,
        TypeKind::Optional(inner) => inner.size() == ty.size() && is_bitwise_equatable(inner),
        TypeKind::Array { element, .. } => is_bitwise_equatable(element),
        TypeKind::Reference(_) | TypeKind::Struct(_) | TypeKind::Variants(_) => false,
    }
}

// =============================================================================
// Compile-time Traits
// =============================================================================

/// Generate the `LayoutTraits` consts and matching generic query fns.
macro_rules! layout_traits {
    ($($name:ident),* $(,)?) => {
        ::paste::paste! {
            /// Layout traits of `Self`, evaluated at compile time.
            pub trait LayoutTraits: Layout {
                $(
                    const [<IS_ $name:upper>]: bool;
                )*
            }

            impl<T: Layout> LayoutTraits for T {
                $(
                    const [<IS_ $name:upper>]: bool = [<is_ $name>](T::DESCRIPTOR);
                )*
            }

            /// Which layout trait a query asks for.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum TypeTrait {
                $( [<$name:camel>], )*
            }

            impl TypeTrait {
                pub const ALL: &'static [TypeTrait] = &[$(TypeTrait::[<$name:camel>]),*];

                /// Evaluate this trait for `ty` without memoisation.
                pub const fn evaluate(self, ty: &TypeDescriptor) -> bool {
                    match self {
                        $( TypeTrait::[<$name:camel>] => [<is_ $name>](ty), )*
                    }
                }
            }
        }
    };
}

layout_traits!(reference_free, bitwise_equatable);

// =============================================================================
// Classifier Seam
// =============================================================================

/// Answers layout-trait queries for runtime descriptors.
pub trait Classifier {
    fn classify(&self, ty: &'static TypeDescriptor, query: TypeTrait) -> bool;

    fn is_reference_free(&self, ty: &'static TypeDescriptor) -> bool {
        self.classify(ty, TypeTrait::ReferenceFree)
    }

    fn is_bitwise_equatable(&self, ty: &'static TypeDescriptor) -> bool {
        self.classify(ty, TypeTrait::BitwiseEquatable)
    }
}

/// Evaluates every query from scratch.
#[derive(Debug, Default, Clone, Copy)]
pub struct Direct;

impl Classifier for Direct {
    fn classify(&self, ty: &'static TypeDescriptor, query: TypeTrait) -> bool {
        query.evaluate(ty)
    }
}

/// The process-wide classifier: the global [`TraitCache`] with `std`,
/// [`Direct`] otherwise.
#[cfg(feature = "std")]
pub fn global() -> &'static TraitCache {
    TraitCache::global()
}

#[cfg(not(feature = "std"))]
pub fn global() -> &'static Direct {
    &Direct
}

/// Whether `T` is reference-free, via the process-wide classifier.
pub fn reference_free<T: Layout>() -> bool {
    global().is_reference_free(T::DESCRIPTOR)
}

/// Whether `T` is bitwise-equatable, via the process-wide classifier.
pub fn bitwise_equatable<T: Layout>() -> bool {
    global().is_bitwise_equatable(T::DESCRIPTOR)
}

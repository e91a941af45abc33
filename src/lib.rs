#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library and the process-wide trait cache
// - alloc: Layout impls for alloc containers in no_std
// - derive: re-exports #[derive(Layout)]

//! # tola-sort
//!
//! Introspective sorting with fallible comparers, and layout-trait
//! classification for deciding when raw byte operations are sound.
//!
//! ## Architecture
//!
//! ### 1. Layout
//! Every type implementing [`Layout`] carries a `'static` [`TypeDescriptor`]
//! listing its declared fields. `#[derive(Layout)]` writes it for user types.
//!
//! ```text
//! struct Pair { id: u64, name: String }
//!     -> TypeDescriptor { "Pair", Struct [ id: u64, name: String ] }
//! ```
//!
//! ### 2. Classification
//! A recursive walk over the descriptor answers *reference-free* and
//! *bitwise-equatable*. The walk is a `const fn`; runtime queries can be
//! memoised in a process-wide [`TraitCache`].
//!
//! ### 3. Sorting
//! Introsort: median-of-three quicksort, heapsort once the depth budget is
//! spent, insertion sort for partitions of 16 or fewer. Keys may carry a
//! parallel value slice. Comparers may fail; inconsistent ones are caught
//! before they can index out of bounds.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Layout                                                  |
//! |  - TypeDescriptor, TypeKind, FieldDescriptor, #[derive(Layout)]   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Classify                                                |
//! |  - is_reference_free, is_bitwise_equatable, LayoutTraits,         |
//! |    Classifier, TraitCache                                         |
//! +-------------------------------------------------------------------+
//!
//! +-------------------------------------------------------------------+
//! |  Layer 2: Sort (independent of layers 0-1)                        |
//! |  - Comparer, IntroSort, NaN pre-pass, binary search               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_sort::prelude::*;
//!
//! #[derive(Layout)]
//! struct Point { x: i32, y: i32 }
//!
//! assert!(Point::IS_REFERENCE_FREE);
//! assert!(!Point::IS_BITWISE_EQUATABLE);
//!
//! let mut keys = [5, 3, 4, 1, 2];
//! tola_sort::sort::sort(&mut keys)?;
//! assert_eq!(keys, [1, 2, 3, 4, 5]);
//! ```

// Allow `::tola_sort` to work inside the crate itself
extern crate self as tola_sort;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Layout
// =============================================================================
pub mod layout;

// =============================================================================
// Layer 1: Classification
// =============================================================================
pub mod classify;

// =============================================================================
// Layer 2: Sorting
// =============================================================================
pub mod sort;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use classify::{Classifier, Direct, LayoutTraits, TypeTrait};
#[cfg(feature = "std")]
pub use classify::TraitCache;
pub use error::SortError;
pub use layout::{FieldDescriptor, Layout, Primitive, ReferenceKind, TypeDescriptor, TypeKind};
pub use sort::Comparer;

#[cfg(feature = "derive")]
pub use macros::Layout;

/// Common items for sorting and classification.
pub mod prelude {
    pub use crate::classify::{Classifier, LayoutTraits};
    pub use crate::error::SortError;
    pub use crate::layout::Layout;
    pub use crate::sort::Comparer;
    #[cfg(feature = "derive")]
    pub use macros::Layout;
}

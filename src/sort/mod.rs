//! # Layer 2: Sorting
//!
//! In-place, unstable, *O*(*n* log *n*) worst-case sorting of a key slice,
//! optionally carrying a parallel value slice along.
//!
//! ## Module Structure
//!
//! ```text
//! sort/
//! ├── comparer.rs  - Comparer seam (Natural, ByFn, TryByFn, Reverse)
//! ├── introsort.rs - The engine
//! ├── nan.rs       - NaN pre-pass for float keys
//! └── search.rs    - Binary search over sorted keys
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tola_sort::sort;
//!
//! let mut keys = [5, 3, 4, 1, 2];
//! let mut values = ['a', 'b', 'c', 'd', 'e'];
//! sort::sort_pairs(&mut keys, &mut values)?;
//! assert_eq!(keys, [1, 2, 3, 4, 5]);
//! assert_eq!(values, ['d', 'e', 'b', 'c', 'a']);
//! ```
//!
//! Every entry point returns `Result`: an inconsistent comparer yields
//! [`SortError::BadComparer`], a fallible one surfaces its own error as
//! [`SortError::ComparisonFailed`].

pub mod comparer;
pub mod introsort;
pub mod nan;
pub mod search;

use core::cmp::Ordering;

pub use comparer::{ByFn, Comparer, Natural, Reverse, TryByFn};
pub use introsort::INSERTION_SORT_THRESHOLD;
pub use nan::{FloatKey, partition_nans_to_front, partition_nans_to_front_with, sort_float_pairs, sort_floats};
pub use search::{binary_search, binary_search_by, binary_search_with, try_binary_search_by};

use crate::error::SortError;
use introsort::IntroSort;

// =============================================================================
// Keys Only
// =============================================================================

/// Sort `keys` by their `Ord` impl.
pub fn sort<K: Ord>(keys: &mut [K]) -> Result<(), SortError> {
    sort_with(keys, Natural)
}

/// Sort `keys` with an infallible comparison.
pub fn sort_by<K, F>(keys: &mut [K], compare: F) -> Result<(), SortError>
where
    F: FnMut(&K, &K) -> Ordering,
{
    sort_with(keys, ByFn(compare))
}

/// Sort `keys` with a fallible comparison. The first `Err` aborts the sort.
pub fn try_sort_by<K, E, F>(keys: &mut [K], compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&K, &K) -> Result<Ordering, E>,
{
    sort_with(keys, TryByFn::new(compare))
}

/// Sort `keys` with any [`Comparer`].
pub fn sort_with<K, C>(keys: &mut [K], comparer: C) -> Result<(), SortError<C::Error>>
where
    C: Comparer<K>,
{
    IntroSort::<K, (), C>::new(keys, None, comparer).run()
}

// =============================================================================
// Keys With Values
// =============================================================================

/// Sort `keys` by `Ord`, applying every move to `values` too.
pub fn sort_pairs<K: Ord, V>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    sort_pairs_with(keys, values, Natural)
}

/// Sort `keys` with an infallible comparison, applying every move to `values` too.
pub fn sort_pairs_by<K, V, F>(keys: &mut [K], values: &mut [V], compare: F) -> Result<(), SortError>
where
    F: FnMut(&K, &K) -> Ordering,
{
    sort_pairs_with(keys, values, ByFn(compare))
}

/// Sort `keys` with a fallible comparison, applying every move to `values` too.
/// The first `Err` aborts the sort.
pub fn try_sort_pairs_by<K, V, E, F>(
    keys: &mut [K],
    values: &mut [V],
    compare: F,
) -> Result<(), SortError<E>>
where
    F: FnMut(&K, &K) -> Result<Ordering, E>,
{
    sort_pairs_with(keys, values, TryByFn::new(compare))
}

/// Sort `keys` with any [`Comparer`], applying every move to `values` too.
///
/// Fails with [`SortError::LengthMismatch`] before touching either slice
/// when their lengths differ.
pub fn sort_pairs_with<K, V, C>(
    keys: &mut [K],
    values: &mut [V],
    comparer: C,
) -> Result<(), SortError<C::Error>>
where
    C: Comparer<K>,
{
    check_lengths(keys.len(), values.len())?;
    IntroSort::new(keys, Some(values), comparer).run()
}

pub(crate) fn check_lengths<E>(keys: usize, values: usize) -> Result<(), SortError<E>> {
    if keys == values {
        Ok(())
    } else {
        Err(SortError::LengthMismatch { keys, values })
    }
}

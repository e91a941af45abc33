//! NaN pre-pass for floating-point keys.
//!
//! NaN is unordered against every float, so it is moved out of the way
//! before sorting: all NaN keys go to the front (their values follow) and
//! only the NaN-free tail is handed to the engine.

use core::cmp::Ordering;

use super::{check_lengths, sort_by, sort_pairs_by};
use crate::error::SortError;

/// Float types the NaN pre-pass understands.
pub trait FloatKey: PartialOrd + Copy {
    fn is_nan(self) -> bool;
}

macro_rules! impl_float_key {
    ($($t:ty),*) => {
        $(
            impl FloatKey for $t {
                #[inline(always)]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }
            }
        )*
    };
}

impl_float_key!(f32, f64);

/// Move every NaN key to the front, returning how many there were.
///
/// Relative order among the NaNs, and among the rest, is not preserved.
pub fn partition_nans_to_front<F: FloatKey>(keys: &mut [F]) -> usize {
    segregate::<F, ()>(keys, None)
}

/// As [`partition_nans_to_front`], swapping `values` alongside.
pub fn partition_nans_to_front_with<F: FloatKey, V>(
    keys: &mut [F],
    values: &mut [V],
) -> Result<usize, SortError> {
    check_lengths(keys.len(), values.len())?;
    Ok(segregate(keys, Some(values)))
}

fn segregate<F: FloatKey, V>(keys: &mut [F], mut values: Option<&mut [V]>) -> usize {
    let mut left = 0;
    for i in 0..keys.len() {
        if keys[i].is_nan() {
            keys.swap(left, i);
            if let Some(values) = values.as_deref_mut() {
                values.swap(left, i);
            }
            left += 1;
        }
    }
    tracing::trace!(nans = left, len = keys.len(), "segregated NaN keys");
    left
}

#[inline]
fn float_order<F: FloatKey>(a: &F, b: &F) -> Ordering {
    // NaN-free by construction
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// NaNs first, then the remaining keys ascending.
pub fn sort_floats<F: FloatKey>(keys: &mut [F]) -> Result<(), SortError> {
    let nans = partition_nans_to_front(keys);
    sort_by(&mut keys[nans..], float_order)
}

/// As [`sort_floats`], carrying `values` along.
pub fn sort_float_pairs<F: FloatKey, V>(keys: &mut [F], values: &mut [V]) -> Result<(), SortError> {
    let nans = partition_nans_to_front_with(keys, values)?;
    sort_pairs_by(&mut keys[nans..], &mut values[nans..], float_order)
}

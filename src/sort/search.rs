//! Binary search over keys sorted by the same comparer.
//!
//! Results follow `slice::binary_search`: `Ok(i)` is some index whose key
//! compares `Equal` to the probe, `Err(i)` is where the probe would be
//! inserted to keep the keys sorted.

use core::cmp::Ordering;

use super::comparer::{ByFn, Comparer, Natural, TryByFn};
use crate::error::SortError;

pub type SearchResult<E = core::convert::Infallible> = Result<Result<usize, usize>, SortError<E>>;

pub fn binary_search<K: Ord>(keys: &[K], value: &K) -> SearchResult {
    binary_search_with(keys, value, Natural)
}

pub fn binary_search_by<K, F>(keys: &[K], value: &K, compare: F) -> SearchResult
where
    F: FnMut(&K, &K) -> Ordering,
{
    binary_search_with(keys, value, ByFn(compare))
}

pub fn try_binary_search_by<K, E, F>(keys: &[K], value: &K, compare: F) -> SearchResult<E>
where
    F: FnMut(&K, &K) -> Result<Ordering, E>,
{
    binary_search_with(keys, value, TryByFn::new(compare))
}

/// Search `keys` for `value`. The comparer is called as `compare(key, value)`.
pub fn binary_search_with<K, C>(keys: &[K], value: &K, mut comparer: C) -> SearchResult<C::Error>
where
    C: Comparer<K>,
{
    let mut lo = 0;
    let mut hi = keys.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match comparer
            .compare(&keys[mid], value)
            .map_err(SortError::ComparisonFailed)?
        {
            Ordering::Equal => return Ok(Ok(mid)),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Ok(Err(lo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_and_insertion_points() {
        let keys = [1, 3, 5, 7];
        assert_eq!(binary_search(&keys, &5).unwrap(), Ok(2));
        assert_eq!(binary_search(&keys, &0).unwrap(), Err(0));
        assert_eq!(binary_search(&keys, &4).unwrap(), Err(2));
        assert_eq!(binary_search(&keys, &9).unwrap(), Err(4));
        assert_eq!(binary_search::<i32>(&[], &9).unwrap(), Err(0));
    }

    #[test]
    fn test_comparer_error_is_wrapped() {
        let keys = [1, 2, 3];
        let err = try_binary_search_by(&keys, &2, |_, _| Err::<Ordering, _>("boom")).unwrap_err();
        assert!(matches!(err, SortError::ComparisonFailed("boom")));
    }
}

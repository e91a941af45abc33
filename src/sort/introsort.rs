//! Introspective sort engine.
//!
//! Quicksort with median-of-three pivots, falling back to heapsort once the
//! depth budget `2 * (floor(log2 n) + 1)` runs out, and finishing partitions
//! of at most [`INSERTION_SORT_THRESHOLD`] elements with small networks or
//! insertion sort. Every key move is mirrored onto the optional values.
//!
//! The Hoare scan relies on the median-of-three sentinels to stop. An
//! inconsistent comparer can defeat them, so both scans check their bounds
//! and report [`SortError::BadComparer`] instead of walking off.

use core::cmp::Ordering;

use super::comparer::Comparer;
use crate::error::SortError;

/// Partitions at or below this size skip quicksort.
pub const INSERTION_SORT_THRESHOLD: usize = 16;

/// Quicksort levels allowed before heapsort takes over. `len` must be non-zero.
pub(crate) fn depth_limit(len: usize) -> usize {
    2 * (len.ilog2() as usize + 1)
}

pub(crate) struct IntroSort<'a, K, V, C> {
    keys: &'a mut [K],
    values: Option<&'a mut [V]>,
    comparer: C,
}

type Outcome<C, K> = Result<(), SortError<<C as Comparer<K>>::Error>>;

impl<'a, K, V, C: Comparer<K>> IntroSort<'a, K, V, C> {
    /// `values`, when present, must be exactly as long as `keys`.
    pub(crate) fn new(keys: &'a mut [K], values: Option<&'a mut [V]>, comparer: C) -> Self {
        debug_assert!(values.as_ref().is_none_or(|v| v.len() == keys.len()));
        Self { keys, values, comparer }
    }

    pub(crate) fn run(mut self) -> Outcome<C, K> {
        let len = self.keys.len();
        if len <= 1 {
            return Ok(());
        }
        self.introsort(0, len - 1, depth_limit(len))
    }

    #[inline(always)]
    fn compare(&mut self, a: usize, b: usize) -> Result<Ordering, SortError<C::Error>> {
        self.comparer
            .compare(&self.keys[a], &self.keys[b])
            .map_err(SortError::ComparisonFailed)
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        if let Some(values) = self.values.as_deref_mut() {
            values.swap(a, b);
        }
    }

    /// Move the element at `from` down to `to`, shifting `[to, from)` up by one.
    fn shift_down(&mut self, to: usize, from: usize) {
        self.keys[to..=from].rotate_right(1);
        if let Some(values) = self.values.as_deref_mut() {
            values[to..=from].rotate_right(1);
        }
    }

    fn swap_if_greater(&mut self, a: usize, b: usize) -> Outcome<C, K> {
        if a != b && self.compare(a, b)? == Ordering::Greater {
            self.swap(a, b);
        }
        Ok(())
    }

    fn bad_comparer(&self) -> SortError<C::Error> {
        SortError::BadComparer { comparer: self.comparer.describe() }
    }

    fn introsort(&mut self, lo: usize, mut hi: usize, mut depth: usize) -> Outcome<C, K> {
        while hi > lo {
            let size = hi - lo + 1;

            if size <= INSERTION_SORT_THRESHOLD {
                match size {
                    2 => self.swap_if_greater(lo, hi)?,
                    3 => {
                        self.swap_if_greater(lo, hi - 1)?;
                        self.swap_if_greater(lo, hi)?;
                        self.swap_if_greater(hi - 1, hi)?;
                    }
                    _ => self.insertion_sort(lo, hi)?,
                }
                return Ok(());
            }

            if depth == 0 {
                tracing::trace!(lo, hi, "depth budget exhausted, heapsorting partition");
                return self.heapsort(lo, hi);
            }
            depth -= 1;

            let p = self.partition(lo, hi)?;
            // Right side recurses, left side loops.
            self.introsort(p + 1, hi, depth)?;
            hi = p - 1;
        }
        Ok(())
    }

    /// Median-of-three then Hoare scan. Returns the pivot's final index,
    /// always in `(lo, hi]`.
    fn partition(&mut self, lo: usize, hi: usize) -> Result<usize, SortError<C::Error>> {
        let mid = lo + (hi - lo) / 2;
        self.swap_if_greater(lo, mid)?;
        self.swap_if_greater(lo, hi)?;
        self.swap_if_greater(mid, hi)?;

        let pivot = hi - 1;
        self.swap(mid, pivot);

        // Invariant: left < right <= pivot - 1 whenever a swap happens, so the
        // pivot stays put during the scan.
        let mut left = lo;
        let mut right = pivot;
        while left < right {
            loop {
                left += 1;
                if left > hi {
                    return Err(self.bad_comparer());
                }
                if self.compare(left, pivot)? != Ordering::Less {
                    break;
                }
            }
            loop {
                if right == lo {
                    return Err(self.bad_comparer());
                }
                right -= 1;
                if self.compare(pivot, right)? != Ordering::Less {
                    break;
                }
            }

            if left >= right {
                break;
            }
            self.swap(left, right);
        }

        if left != pivot {
            self.swap(left, pivot);
        }
        Ok(left)
    }

    fn insertion_sort(&mut self, lo: usize, hi: usize) -> Outcome<C, K> {
        for current in lo + 1..=hi {
            let mut slot = current;
            while slot > lo && self.compare(current, slot - 1)? == Ordering::Less {
                slot -= 1;
            }
            if slot != current {
                self.shift_down(slot, current);
            }
        }
        Ok(())
    }

    fn heapsort(&mut self, lo: usize, hi: usize) -> Outcome<C, K> {
        let n = hi - lo + 1;
        for i in (1..=n / 2).rev() {
            self.sift_down(i, n, lo)?;
        }
        for i in (2..=n).rev() {
            self.swap(lo, lo + i - 1);
            self.sift_down(1, i - 1, lo)?;
        }
        Ok(())
    }

    /// 1-based heap of `n` elements starting at `lo`.
    fn sift_down(&mut self, mut i: usize, n: usize, lo: usize) -> Outcome<C, K> {
        while i <= n / 2 {
            let mut child = 2 * i;
            if child < n && self.compare(lo + child - 1, lo + child)? == Ordering::Less {
                child += 1;
            }
            if self.compare(lo + i - 1, lo + child - 1)? != Ordering::Less {
                break;
            }
            self.swap(lo + i - 1, lo + child - 1);
            i = child;
        }
        Ok(())
    }
}

//! Sort failures.

use core::convert::Infallible;

/// Why a sort or search did not complete.
///
/// `E` is the comparer's own error type; infallible comparers use the
/// default. After a comparer-caused error the slice holds some permutation
/// of its original elements in unspecified order.
#[derive(Debug, thiserror::Error)]
pub enum SortError<E = Infallible> {
    /// A partition scan ran past its bounds. Only an inconsistent comparer
    /// (e.g. one where `cmp(a, a) != Equal`) can cause this.
    #[error("comparer `{comparer}` is inconsistent: a partition scan ran out of bounds")]
    BadComparer { comparer: &'static str },

    /// The comparer returned an error.
    #[error("comparison failed")]
    ComparisonFailed(#[source] E),

    /// Keys and values differ in length. Raised before anything moves.
    #[error("keys and values differ in length: {keys} keys, {values} values")]
    LengthMismatch { keys: usize, values: usize },
}

impl<E> SortError<E> {
    pub fn is_bad_comparer(&self) -> bool {
        matches!(self, SortError::BadComparer { .. })
    }
}

//! Comparison seam for the sort engine.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::marker::PhantomData;

/// A total order over `K`, possibly fallible.
///
/// Implementations are expected to be consistent: the same pair compares
/// the same way every time, and `compare(a, a)` is `Equal`. The engine
/// stays in bounds when this is violated but the result order is then
/// unspecified.
pub trait Comparer<K: ?Sized> {
    type Error;

    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, Self::Error>;

    /// Identity reported in bad-comparer errors.
    fn describe(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<K: ?Sized, C: Comparer<K> + ?Sized> Comparer<K> for &mut C {
    type Error = C::Error;

    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }

    fn describe(&self) -> &'static str {
        (**self).describe()
    }
}

/// `Ord`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparer<K> for Natural {
    type Error = Infallible;

    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// Infallible closure.
pub struct ByFn<F>(pub F);

impl<K: ?Sized, F> Comparer<K> for ByFn<F>
where
    F: FnMut(&K, &K) -> Ordering,
{
    type Error = Infallible;

    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, Infallible> {
        Ok((self.0)(a, b))
    }
}

/// Fallible closure.
pub struct TryByFn<F, E>(pub F, PhantomData<fn() -> E>);

impl<F, E> TryByFn<F, E> {
    pub fn new(f: F) -> Self {
        Self(f, PhantomData)
    }
}

impl<K: ?Sized, F, E> Comparer<K> for TryByFn<F, E>
where
    F: FnMut(&K, &K) -> Result<Ordering, E>,
{
    type Error = E;

    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, E> {
        (self.0)(a, b)
    }
}

/// Reverses the wrapped order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparer<K>> Comparer<K> for Reverse<C> {
    type Error = C::Error;

    #[inline(always)]
    fn compare(&mut self, a: &K, b: &K) -> Result<Ordering, C::Error> {
        self.0.compare(b, a)
    }

    fn describe(&self) -> &'static str {
        self.0.describe()
    }
}

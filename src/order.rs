//! Comparison functions.
//!
//! Every sort in this crate is driven by a `FnMut(&T, &T) -> Ordering` that must describe a total
//! order for the duration of one call. `Less`, `Equal` and `Greater` mean `a` sorts before, together
//! with, or after `b`.

use std::cmp::Ordering;

/// The order given by `T: Ord`, used by all the `sort` convenience functions.
#[inline]
pub fn natural<T>(a: &T, b: &T) -> Ordering
where
    T: Ord,
{
    a.cmp(b)
}

/// Returns `true` if `v` is non-descending according to `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

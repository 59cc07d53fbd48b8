//! Top-down merge sort. Halves recursively down to single elements, then merges back up.

use std::cmp::Ordering;

use log::debug;

use crate::permutation;
use crate::stable::merge::merge;

pub const NAME: &str = "merge_top_down_stable";

sort_impl!(NAME);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    debug!("{NAME}: sorting {len} elements");

    permutation::sort_by_positions(v, compare, |positions, compare_positions| {
        sort_vec(positions, compare_positions)
    });
}

/// Sorts `v` into a newly built vector.
pub fn sort_vec<T, F>(v: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut compare)
}

// Recursion depth is ceil(log2(len)).
fn merge_sort<T, F>(mut v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return v;
    }

    let right = v.split_off(v.len() / 2);

    let left = merge_sort(v, compare);
    let right = merge_sort(right, compare);

    merge(left, right, compare)
}

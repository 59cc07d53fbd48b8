//! Quicksort with an in-place three-way partition.
//!
//! Each step partitions a window of the slice into elements less than, equal to and greater than
//! the pivot using swaps only. The equal region is final, the other two are queued on an explicit
//! worklist instead of recursing, so degenerate pivots cost time but never stack.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::pivot;

pub const NAME: &str = "quicksort_in_place_unstable";

sort_impl!(NAME);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_by_with_pivot(v, pivot::DEFAULT, compare);
}

/// Sorts `v` choosing every pivot with `choose_pivot`, see [`crate::pivot`].
pub fn sort_by_with_pivot<T, P, F>(v: &mut [T], choose_pivot: P, mut compare: F)
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    debug!("{NAME}: sorting {len} elements");

    quicksort(v, &choose_pivot, &mut compare);
}

fn quicksort<T, P, F>(v: &mut [T], choose_pivot: &P, compare: &mut F)
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    // Windows still to partition, as (start, len). Pushing the larger side first means the smaller
    // one is handled next, which keeps the worklist at O(log(len)) entries.
    let mut work = vec![(0, v.len())];

    while let Some((start, len)) = work.pop() {
        let (equal_start, equal_end) = partition(v, start, len, choose_pivot, compare);

        let less = (start, equal_start - start);
        let greater = (equal_end, start + len - equal_end);

        let (larger, smaller) = if less.1 >= greater.1 {
            (less, greater)
        } else {
            (greater, less)
        };

        for window in [larger, smaller] {
            if window.1 >= 2 {
                work.push(window);
            }
        }
    }
}

/// Partitions the window `start..start + len` of `v` around a pivot chosen by `choose_pivot`.
///
/// Returns `(equal_start, equal_end)` such that afterwards every element in `start..equal_start`
/// is less than the pivot, every element in `equal_start..equal_end` equal to it, and every
/// element in `equal_end..start + len` greater. Elements outside the window are not touched.
///
/// Windows shorter than 2 are returned as they are, with everything in the equal region.
///
/// Only swaps are used, the pivot is represented by the element at `equal_start`. If `compare` is
/// not a total order the result is unspecified, but all accesses stay inside the window.
pub fn partition<T, P, F>(
    v: &mut [T],
    start: usize,
    len: usize,
    choose_pivot: &P,
    compare: &mut F,
) -> (usize, usize)
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(start + len <= v.len());

    if len < 2 {
        return (start, start + len);
    }

    let pivot_pos = choose_pivot(start, len);
    debug_assert!((start..start + len).contains(&pivot_pos));

    // The pivot becomes the first element of the equal region.
    v.swap(start, pivot_pos);

    // start..equal_start       less
    // equal_start..equal_end   equal
    // equal_end..=end          not yet looked at
    // end + 1..start + len     greater
    let mut equal_start = start;
    let mut equal_end = start + 1;
    let mut end = start + len - 1;

    while equal_end <= end {
        match compare(&v[equal_start], &v[end]) {
            Ordering::Greater => {
                // Rotate v[end] into the less region. The equal region shifts up by one, its first
                // element takes the place of the first unclassified one, and that one moves to end.
                v.swap(equal_start, end);
                v.swap(end, equal_end);
                equal_start += 1;
                equal_end += 1;
            }
            Ordering::Equal => {
                v.swap(equal_end, end);
                equal_end += 1;
            }
            Ordering::Less => {
                // Can't underflow, end >= equal_end > start here.
                end -= 1;
            }
        }
    }

    trace!(
        "{NAME}: window {start}..{} pivot {pivot_pos} -> less {}, equal {}, greater {}",
        start + len,
        equal_start - start,
        equal_end - equal_start,
        start + len - equal_end
    );

    (equal_start, equal_end)
}

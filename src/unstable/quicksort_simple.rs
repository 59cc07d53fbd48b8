//! Quicksort that partitions by copying into three new vectors.
//!
//! Less, equal and greater elements are moved into separate vectors in one scan, the outer two
//! are sorted the same way and the three are concatenated. Simpler than the in-place partition,
//! at the cost of O(len) extra memory per level.

use std::cmp::Ordering;

use log::debug;

use crate::permutation;
use crate::pivot;

pub const NAME: &str = "quicksort_simple_unstable";

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
pub fn sort_by_with_pivot<T, P, F>(v: &mut [T], choose_pivot: P, compare: F)
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    debug!("{NAME}: sorting {len} elements");

    permutation::sort_by_positions(v, compare, |positions, compare_positions| {
        sort_vec(positions, &choose_pivot, compare_positions)
    });
}

/// Sorts `v` into a newly built vector.
pub fn sort_vec<T, P, F>(v: Vec<T>, choose_pivot: P, mut compare: F) -> Vec<T>
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &choose_pivot, &mut compare)
}

enum Work<T> {
    Sort(Vec<T>),
    Emit(Vec<T>),
}

fn quicksort<T, P, F>(v: Vec<T>, choose_pivot: &P, compare: &mut F) -> Vec<T>
where
    P: Fn(usize, usize) -> usize,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(v.len());

    // Pending pieces in reverse output order. Sorting the less part before emitting the equal part
    // and sorting the greater part is the recursion, without using the call stack.
    let mut work = vec![Work::Sort(v)];

    while let Some(item) = work.pop() {
        let mut v = match item {
            Work::Emit(run) => {
                sorted.extend(run);
                continue;
            }
            Work::Sort(v) => v,
        };

        let len = v.len();
        if len < 2 {
            sorted.extend(v);
            continue;
        }

        let pivot_pos = choose_pivot(0, len);
        debug_assert!(pivot_pos < len);
        let pivot = v.remove(pivot_pos);

        let mut less = Vec::new();
        let mut equal = Vec::new();
        let mut greater = Vec::new();

        for elem in v {
            match compare(&pivot, &elem) {
                Ordering::Greater => less.push(elem),
                Ordering::Equal => equal.push(elem),
                Ordering::Less => greater.push(elem),
            }
        }

        equal.insert(0, pivot);

        work.push(Work::Sort(greater));
        work.push(Work::Emit(equal));
        work.push(Work::Sort(less));
    }

    sorted
}

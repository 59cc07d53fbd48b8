//! Bottom-up merge sort. Starts with one run per element and merges neighbouring runs, doubling
//! their length each round, until a single run is left.

use std::cmp::Ordering;

use log::{debug, trace};

use crate::permutation;
use crate::stable::merge::merge;

pub const NAME: &str = "merge_bottom_up_stable";

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

fn merge_sort<T, F>(v: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut runs: Vec<Vec<T>> = v.into_iter().map(|elem| vec![elem]).collect();

    while runs.len() > 1 {
        trace!("{NAME}: merging {} runs", runs.len());

        let mut merged_runs = Vec::with_capacity((runs.len() + 1) / 2);
        let mut runs_iter = runs.into_iter();

        while let Some(left) = runs_iter.next() {
            match runs_iter.next() {
                Some(right) => merged_runs.push(merge(left, right, compare)),
                // Odd run count, the last one moves up unmerged.
                None => merged_runs.push(left),
            }
        }

        runs = merged_runs;
    }

    runs.pop().unwrap_or_default()
}

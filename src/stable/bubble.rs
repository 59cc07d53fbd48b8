//! Bubble sort. Full passes over the slice until one of them swaps nothing.

use std::cmp::Ordering;

use log::debug;

pub const NAME: &str = "bubble_stable";

sort_impl!(NAME);

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a: &T, b: &T| a.cmp(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut compare);
}

/// One scan from start to end, swapping every adjacent pair where the left element compares
/// `Greater`. Returns the number of swaps.
///
/// Afterwards the largest element of the scanned region is at its end.
pub fn pass<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut swaps = 0;

    for i in 1..v.len() {
        if compare(&v[i - 1], &v[i]) == Ordering::Greater {
            v.swap(i - 1, i);
            swaps += 1;
        }
    }

    swaps
}

fn bubble_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    debug!("{NAME}: sorting {len} elements");

    // With a total order the last pass that still swaps is at most pass len - 1. The limit only
    // matters for comparisons that are not, eg. one that always says `Greater` would never settle.
    for passes in 1..=len {
        if pass(v, compare) == 0 {
            debug!("{NAME}: done after {passes} passes");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_counts_swaps() {
        let mut v = [3, 1, 2];
        assert_eq!(pass(&mut v, &mut |a: &i32, b: &i32| a.cmp(b)), 2);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(pass(&mut v, &mut |a: &i32, b: &i32| a.cmp(b)), 0);
    }

    #[test]
    fn pass_moves_max_to_end() {
        let mut v = [9, 4, 7, 1, 8];
        pass(&mut v, &mut |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(v[4], 9);
    }

    #[test]
    fn always_greater_terminates() {
        let mut v = [1, 2, 3, 4, 5, 6];
        sort_by(&mut v, |_, _| Ordering::Greater);

        let mut sorted = v;
        sorted.sort();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6]);
    }
}

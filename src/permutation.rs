//! Moving a computed order back into the caller's slice.
//!
//! The copying sorts never move `T` values around while comparing. They sort a `Vec<usize>` of
//! positions instead, and only once that finished without panicking the slice is rearranged with
//! swaps. The slice therefore always keeps its original set of elements.

use std::cmp::Ordering;

/// Rearranges `v` so that afterwards `v[i]` holds what was at `v[order[i]]`.
///
/// `order` has to be a permutation of `0..v.len()`. It is consumed as scratch space.
pub fn apply<T>(v: &mut [T], mut order: Vec<usize>) {
    assert_eq!(v.len(), order.len());
    debug_assert!(is_permutation(&order));

    // Follow each cycle once. A visited position is marked by pointing at itself.
    for cycle_start in 0..order.len() {
        let mut current = cycle_start;

        loop {
            let source = order[current];
            order[current] = current;

            if source == cycle_start || source == current {
                break;
            }

            v.swap(current, source);
            current = source;
        }
    }
}

/// Sorts `v` by running `sort_positions` over the positions `0..v.len()` and applying the result.
///
/// `sort_positions` receives the positions and a comparison between positions that forwards to
/// `compare` on the referenced elements. It has to return a permutation of its input.
pub fn sort_by_positions<T, F, S>(v: &mut [T], mut compare: F, sort_positions: S)
where
    F: FnMut(&T, &T) -> Ordering,
    S: FnOnce(Vec<usize>, &mut dyn FnMut(&usize, &usize) -> Ordering) -> Vec<usize>,
{
    let order = {
        let elements = &*v;
        let mut compare_positions =
            |a: &usize, b: &usize| -> Ordering { compare(&elements[*a], &elements[*b]) };

        sort_positions((0..elements.len()).collect(), &mut compare_positions)
    };

    apply(v, order);
}

fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];

    order
        .iter()
        .all(|&pos| pos < seen.len() && !std::mem::replace(&mut seen[pos], true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_identity() {
        let mut v = vec!['a', 'b', 'c'];
        apply(&mut v, vec![0, 1, 2]);
        assert_eq!(v, ['a', 'b', 'c']);
    }

    #[test]
    fn apply_cycles() {
        let mut v = vec!['a', 'b', 'c', 'd', 'e'];
        // One 3-cycle, one 2-cycle.
        apply(&mut v, vec![2, 0, 1, 4, 3]);
        assert_eq!(v, ['c', 'a', 'b', 'e', 'd']);

        let mut v = vec![10, 20, 30, 40];
        apply(&mut v, vec![3, 2, 1, 0]);
        assert_eq!(v, [40, 30, 20, 10]);

        let mut v = vec![10, 20, 30, 40];
        apply(&mut v, vec![1, 2, 3, 0]);
        assert_eq!(v, [20, 30, 40, 10]);
    }

    #[test]
    fn apply_empty() {
        let mut v: Vec<String> = Vec::new();
        apply(&mut v, Vec::new());
        assert!(v.is_empty());
    }

    #[test]
    fn sort_by_positions_uses_returned_order() {
        let mut v = vec!["pear", "apple", "fig"];
        sort_by_positions(
            &mut v,
            |a, b| a.cmp(b),
            |mut positions, compare| {
                positions.sort_by(|a, b| compare(a, b));
                positions
            },
        );
        assert_eq!(v, ["apple", "fig", "pear"]);
    }

    #[test]
    fn detects_non_permutations() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[1, 0, 2]));
        assert!(!is_permutation(&[0, 0, 2]));
        assert!(!is_permutation(&[0, 3, 1]));
    }
}

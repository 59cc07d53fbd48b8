//! The merge shared by both merge sorts.

use std::cmp::Ordering;

/// Merges two sorted sequences into a new sorted sequence.
///
/// On ties the head of `left` is taken first, so the result is stable as long as `left` came
/// before `right` in the input. Both merge sorts rely on this to produce identical output.
pub fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };

        let next = if take_right {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    // At most one of them still has elements.
    merged.extend(left);
    merged.extend(right);

    merged
}

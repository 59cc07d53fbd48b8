//! Pivot selection policies for the quicksort variants.
//!
//! A selector receives a window `(start, len)` with `len >= 2` and returns an index in
//! `start..start + len`. Any `Fn(usize, usize) -> usize` works, these are the two stock ones.

/// Function pointer type of the stock selectors.
pub type PivotSelector = fn(usize, usize) -> usize;

/// Always the first element of the window. Every partition of sorted or reverse sorted input then
/// only splits off one element, which makes those inputs quadratic.
#[inline]
pub fn first_index(start: usize, _len: usize) -> usize {
    start
}

/// The middle element of the window, the default. Sorted and reverse sorted inputs split evenly.
#[inline]
pub fn middle_index(start: usize, len: usize) -> usize {
    start + len / 2
}

pub const DEFAULT: PivotSelector = middle_index;

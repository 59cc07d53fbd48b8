//! Sorts that may reorder equal elements.

pub mod quicksort_in_place;
pub mod quicksort_simple;

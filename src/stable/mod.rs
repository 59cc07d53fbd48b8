//! Sorts that keep equal elements in their original relative order.

pub mod bubble;
pub mod merge;
pub mod merge_bottom_up;
pub mod merge_top_down;

/// The surface every sort implementation exposes to the test battery and the benchmarks.
pub trait Sort {
    /// Names ending in `_stable` get their stability checked, names containing `unstable` are
    /// expected to reorder equal elements at least sometimes.
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

#[cfg(feature = "battery")]
pub mod patterns;

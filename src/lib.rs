//! Classic comparison sorts: bubble sort, top-down and bottom-up merge sort, and quicksort with
//! either a copying or an in-place three-way partition.
//!
//! Every algorithm module exposes the same surface, `sort` for `T: Ord` and `sort_by` with an
//! explicit comparison, plus a `SortImpl` for the shared test battery. [`Algorithm`] selects one of
//! them at runtime.

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod order;
pub mod permutation;
pub mod pivot;
pub mod stable;
pub mod unstable;

pub use sort_test_tools::Sort;

/// The available algorithms, selected at construction time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    MergeTopDown,
    MergeBottomUp,
    QuicksortSimple,
    QuicksortInPlace,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::MergeTopDown,
        Algorithm::MergeBottomUp,
        Algorithm::QuicksortSimple,
        Algorithm::QuicksortInPlace,
    ];

    /// Same name the matching `SortImpl` reports.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => stable::bubble::NAME,
            Algorithm::MergeTopDown => stable::merge_top_down::NAME,
            Algorithm::MergeBottomUp => stable::merge_bottom_up::NAME,
            Algorithm::QuicksortSimple => unstable::quicksort_simple::NAME,
            Algorithm::QuicksortInPlace => unstable::quicksort_in_place::NAME,
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::MergeTopDown | Algorithm::MergeBottomUp
        )
    }

    #[inline]
    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(v, order::natural);
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => stable::bubble::sort_by(v, compare),
            Algorithm::MergeTopDown => stable::merge_top_down::sort_by(v, compare),
            Algorithm::MergeBottomUp => stable::merge_bottom_up::sort_by(v, compare),
            Algorithm::QuicksortSimple => unstable::quicksort_simple::sort_by(v, compare),
            Algorithm::QuicksortInPlace => unstable::quicksort_in_place::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| ParseAlgorithmError {
                name: s.to_owned(),
            })
    }
}

/// Returned when a string names none of the [`Algorithm`] variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    name: String,
}

impl ParseAlgorithmError {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort algorithm '{}', expected one of: ", self.name)?;

        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            f.write_str(algorithm.name())?;
        }

        Ok(())
    }
}

impl Error for ParseAlgorithmError {}

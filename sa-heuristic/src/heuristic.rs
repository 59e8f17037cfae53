pub mod distances;

use crate::prelude::*;
use derive_more::AddAssign;

pub use distances::*;

#[derive(Clone, AddAssign, Default, Copy, Debug)]
pub struct HeuristicStats {
    /// The value of the heuristic at the start.
    pub h0: Cost,
}

/// An object containing the settings for a heuristic.
pub trait Heuristic: std::fmt::Debug + Copy + Send {
    type Instance: HeuristicInstance;

    /// Whether `h` never overestimates the remaining cost.
    /// Only then is the first time A* pops the target guaranteed optimal.
    const IS_ADMISSIBLE: bool = true;

    /// Build the heuristic for two documents, given the size of each sentence.
    fn build(&self, sizes_a: &[Cost], sizes_b: &[Cost]) -> Self::Instance;

    fn name(&self) -> String;
}

/// An instantiation of a heuristic for a specific pair of documents.
pub trait HeuristicInstance {
    fn h(&self, pos: Pos) -> Cost;

    fn stats(&self) -> HeuristicStats {
        HeuristicStats {
            h0: self.h(Pos(0, 0)),
        }
    }
}

/// The total sentence size of each suffix of both documents:
/// `a[i] = size(A[i..])` and `b[j] = size(B[j..])`.
///
/// Computed once per alignment in `O(m+n)`, so each heuristic query is `O(1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSums {
    a: Vec<Cost>,
    b: Vec<Cost>,
}

fn suffix_sums(sizes: &[Cost]) -> Vec<Cost> {
    let mut sums = vec![0; sizes.len() + 1];
    for k in (0..sizes.len()).rev() {
        sums[k] = sums[k + 1] + sizes[k];
    }
    sums
}

impl SuffixSums {
    pub fn new(sizes_a: &[Cost], sizes_b: &[Cost]) -> Self {
        Self {
            a: suffix_sums(sizes_a),
            b: suffix_sums(sizes_b),
        }
    }

    #[inline]
    pub fn a(&self, i: I) -> Cost {
        self.a[i as usize]
    }

    #[inline]
    pub fn b(&self, j: I) -> Cost {
        self.b[j as usize]
    }
}

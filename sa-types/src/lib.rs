//! Types shared by the sentence aligner crates.
//!
//! A `Document` is a list of `Sentence`s, and an alignment between two
//! documents is a path through the grid of positions `Pos(i, j)`, meaning that
//! the first `i` sentences of `a` and the first `j` sentences of `b` have been
//! consumed.
mod alignment;
mod document;
mod error;

pub use alignment::*;
pub use document::*;
pub use error::*;

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::ops::Add;

/// Type for costs. Costs are counted in units (characters or tokens), and
/// never negative.
pub type Cost = u32;

/// Type for sentence indices.
pub type I = u32;

/// A position in the alignment grid: `i` sentences of `a` and `j` sentences
/// of `b` have been consumed.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos(pub I, pub I);

impl Pos {
    /// The end of the alignment of `a` and `b`.
    pub fn target(a: &Document, b: &Document) -> Self {
        Pos(a.len() as I, b.len() as I)
    }

    /// The anti-diagonal of the position. Every edge increases it by 1 or 2.
    pub fn fr(&self) -> I {
        self.0 + self.1
    }

    /// True when `self` is component-wise at most `target`.
    pub fn is_within(&self, target: Pos) -> bool {
        self.0 <= target.0 && self.1 <= target.1
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, Pos(i, j): Self) -> Self::Output {
        Pos(self.0 + i, self.1 + j)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Debug>::fmt(self, f)
    }
}

//! The output of an alignment: the path of operations and the candidates
//! derived from it.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::{Cost, Pos};

/// The three transitions of the alignment grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `(i, j) -> (i+1, j+1)`: sentence `i` of `a` is paired with sentence `j` of `b`.
    Align,
    /// `(i, j) -> (i+1, j)`: sentence `i` of `a` is left unmatched.
    Delete,
    /// `(i, j) -> (i, j+1)`: sentence `j` of `b` is left unmatched.
    Insert,
}

impl Operation {
    pub fn delta(&self) -> Pos {
        match self {
            Operation::Align => Pos(1, 1),
            Operation::Delete => Pos(1, 0),
            Operation::Insert => Pos(0, 1),
        }
    }

    /// The position this operation was taken from to arrive at `pos`.
    pub fn back(&self, &Pos(i, j): &Pos) -> Option<Pos> {
        Some(match self {
            Operation::Align => Pos(i.checked_sub(1)?, j.checked_sub(1)?),
            Operation::Delete => Pos(i.checked_sub(1)?, j),
            Operation::Insert => Pos(i, j.checked_sub(1)?),
        })
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Operation::Align => "align",
            Operation::Delete => "delete",
            Operation::Insert => "insert",
        })
    }
}

/// One edge of the alignment path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentStep {
    pub from: Pos,
    pub to: Pos,
    pub op: Operation,
    pub cost: Cost,
}

impl AlignmentStep {
    pub fn new(from: Pos, op: Operation, cost: Cost) -> Self {
        Self {
            from,
            to: from + op.delta(),
            op,
            cost,
        }
    }

    /// The sentence of `a` consumed by this step, if any.
    pub fn index_a(&self) -> Option<usize> {
        match self.op {
            Operation::Align | Operation::Delete => Some(self.from.0 as usize),
            Operation::Insert => None,
        }
    }

    /// The sentence of `b` consumed by this step, if any.
    pub fn index_b(&self) -> Option<usize> {
        match self.op {
            Operation::Align | Operation::Insert => Some(self.from.1 as usize),
            Operation::Delete => None,
        }
    }
}

/// The similarity judgement for a pair of aligned sentences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlagiarismCandidate {
    pub index_a: usize,
    pub index_b: usize,
    /// `1 - cost / max(size_a, size_b, 1)`, in `[0, 1]`.
    pub similarity: f64,
    /// The edit distance between the two sentences.
    pub cost: Cost,
    /// Whether the similarity exceeds the threshold.
    pub flagged: bool,
}

/// The full result of aligning two documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub total_cost: Cost,
    pub alignment_path: Vec<AlignmentStep>,
    /// One candidate per `Align` step, in path order.
    pub plagiarism_candidates: Vec<PlagiarismCandidate>,
}

impl AlignmentResult {
    pub fn flagged(&self) -> impl Iterator<Item = &PlagiarismCandidate> + '_ {
        self.plagiarism_candidates.iter().filter(|c| c.flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_inverts_delta() {
        for op in [Operation::Align, Operation::Delete, Operation::Insert] {
            let step = AlignmentStep::new(Pos(2, 3), op, 0);
            assert_eq!(op.back(&step.to), Some(step.from));
            assert!(step.to.fr() > step.from.fr());
        }
        assert_eq!(Operation::Align.back(&Pos(0, 3)), None);
        assert_eq!(Operation::Insert.back(&Pos(3, 0)), None);
    }

    #[test]
    fn indices() {
        let del = AlignmentStep::new(Pos(1, 4), Operation::Delete, 5);
        assert_eq!((del.index_a(), del.index_b()), (Some(1), None));
        let ins = AlignmentStep::new(Pos(1, 4), Operation::Insert, 5);
        assert_eq!((ins.index_a(), ins.index_b()), (None, Some(4)));
        let al = AlignmentStep::new(Pos(1, 4), Operation::Align, 0);
        assert_eq!((al.index_a(), al.index_b()), (Some(1), Some(4)));
    }
}

use thiserror::Error;

use crate::{Cost, DocId, Pos};

/// Everything that can go wrong while aligning two documents.
///
/// Malformed input is reported before the search starts. The remaining
/// variants indicate a bug in the search and are not recoverable: the
/// algorithm is deterministic and a retry fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlignError {
    #[error("document {doc} has no sentences")]
    EmptyDocument { doc: DocId },

    #[error("sentence {index} of document {doc} has no tokens")]
    EmptySentence { doc: DocId, index: usize },

    #[error("token {token} of sentence {index} of document {doc} is empty")]
    EmptyToken {
        doc: DocId,
        index: usize,
        token: usize,
    },

    #[error("similarity threshold {0} is not in (0, 1]")]
    InvalidThreshold(f64),

    #[error("priority queue is empty before the target {target} is reached")]
    SearchExhausted { target: Pos },

    #[error("no provenance from {target} back to the start: stuck at {at} after {steps} steps")]
    BrokenProvenance { target: Pos, at: Pos, steps: usize },

    #[error("traceback cost {traced} does not equal the distance {distance} to {target}")]
    TracebackCostMismatch {
        target: Pos,
        traced: Cost,
        distance: Cost,
    },
}

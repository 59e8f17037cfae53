//! Turn the aligned sentence pairs of a path into plagiarism candidates.
use crate::prelude::*;

/// `1 - cost / max(size_a, size_b, 1)`.
///
/// Lies in `[0, 1]` whenever `cost` is the edit distance of the two
/// sentences, since that never exceeds the larger size.
pub fn similarity(cost: Cost, size_a: Cost, size_b: Cost) -> f64 {
    let max_len = max(max(size_a, size_b), 1);
    1.0 - cost as f64 / max_len as f64
}

/// Thresholds must lie in `(0, 1]`.
pub fn check_threshold(threshold: f64) -> Result<f64, AlignError> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(threshold)
    } else {
        Err(AlignError::InvalidThreshold(threshold))
    }
}

/// One candidate per `Align` step of `path`, in path order. A candidate is
/// flagged when its similarity is strictly above `threshold`.
///
/// Deletions and insertions have no sentence to compare against and are skipped.
pub fn classify(
    path: &[AlignmentStep],
    sizes_a: &[Cost],
    sizes_b: &[Cost],
    threshold: f64,
) -> Vec<PlagiarismCandidate> {
    path.iter()
        .filter(|step| step.op == Operation::Align)
        .map(|step| {
            let (i, j) = (step.from.0 as usize, step.from.1 as usize);
            let similarity = similarity(step.cost, sizes_a[i], sizes_b[j]);
            PlagiarismCandidate {
                index_a: i,
                index_b: j,
                similarity,
                cost: step.cost,
                flagged: similarity > threshold,
            }
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_bounds() {
        assert_eq!(similarity(0, 9, 9), 1.0);
        assert_eq!(similarity(9, 9, 4), 0.0);
        assert!((similarity(1, 10, 8) - 0.9).abs() < 1e-12);
        // Guard against empty sentences.
        assert_eq!(similarity(0, 0, 0), 1.0);
    }

    #[test]
    fn thresholds() {
        assert_eq!(check_threshold(0.8), Ok(0.8));
        assert_eq!(check_threshold(1.0), Ok(1.0));
        assert_eq!(check_threshold(0.0), Err(AlignError::InvalidThreshold(0.0)));
        assert_eq!(check_threshold(1.5), Err(AlignError::InvalidThreshold(1.5)));
        assert!(check_threshold(f64::NAN).is_err());
    }

    #[test]
    fn only_aligned_pairs() {
        let path = [
            AlignmentStep::new(Pos(0, 0), Operation::Align, 0),
            AlignmentStep::new(Pos(1, 1), Operation::Delete, 4),
            AlignmentStep::new(Pos(2, 1), Operation::Align, 2),
            AlignmentStep::new(Pos(3, 2), Operation::Insert, 3),
        ];
        let candidates = classify(&path, &[10, 4, 5], &[10, 10, 3], 0.8);
        assert_eq!(candidates.len(), 2);
        assert_eq!(
            candidates[0],
            PlagiarismCandidate {
                index_a: 0,
                index_b: 0,
                similarity: 1.0,
                cost: 0,
                flagged: true
            }
        );
        assert_eq!((candidates[1].index_a, candidates[1].index_b), (2, 1));
        // 1 - 2/10
        assert!((candidates[1].similarity - 0.8).abs() < 1e-12);
        // Not strictly above the threshold.
        assert!(!candidates[1].flagged);
    }
}

//! O(1) evaluation heuristics based on the remaining sentence sizes.
use crate::prelude::*;

use super::*;

// # ZERO HEURISTIC
// A* with this heuristic is Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroCost;
impl Heuristic for ZeroCost {
    type Instance = ZeroCostI;

    fn build(&self, _sizes_a: &[Cost], _sizes_b: &[Cost]) -> Self::Instance {
        ZeroCostI
    }

    fn name(&self) -> String {
        "Zero".into()
    }
}

pub struct ZeroCostI;
impl HeuristicInstance for ZeroCostI {
    fn h(&self, _pos: Pos) -> Cost {
        0
    }
}

// # GAP HEURISTIC
// An align step costs at least the size difference of its two sentences, and
// a delete or insert step costs the full size of its sentence. By the triangle
// inequality the remaining cost is at least the difference of the remaining
// sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapCost;
impl Heuristic for GapCost {
    type Instance = GapCostI;

    fn build(&self, sizes_a: &[Cost], sizes_b: &[Cost]) -> Self::Instance {
        GapCostI {
            sums: SuffixSums::new(sizes_a, sizes_b),
        }
    }

    fn name(&self) -> String {
        "Gap".into()
    }
}

pub struct GapCostI {
    sums: SuffixSums,
}

impl HeuristicInstance for GapCostI {
    fn h(&self, Pos(i, j): Pos) -> Cost {
        self.sums.a(i).abs_diff(self.sums.b(j))
    }
}

// # MAX HEURISTIC
// The larger of the two remaining sizes.
// NOTE: This overestimates as soon as the remaining suffixes share content:
// aligning two equal sentences costs 0 but reduces this bound by their size.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxCost;
impl Heuristic for MaxCost {
    type Instance = MaxCostI;
    const IS_ADMISSIBLE: bool = false;

    fn build(&self, sizes_a: &[Cost], sizes_b: &[Cost]) -> Self::Instance {
        MaxCostI {
            sums: SuffixSums::new(sizes_a, sizes_b),
        }
    }

    fn name(&self) -> String {
        "Max".into()
    }
}

pub struct MaxCostI {
    sums: SuffixSums,
}

impl HeuristicInstance for MaxCostI {
    fn h(&self, Pos(i, j): Pos) -> Cost {
        max(self.sums.a(i), self.sums.b(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn random_sizes(rng: &mut ChaCha8Rng) -> (Vec<Cost>, Vec<Cost>) {
        let m = rng.gen_range(0..6);
        let n = rng.gen_range(0..6);
        (
            (0..m).map(|_| rng.gen_range(1..20)).collect(),
            (0..n).map(|_| rng.gen_range(1..20)).collect(),
        )
    }

    /// Check `h(u) <= c(u, v) + h(v)` for every edge, using the cheapest
    /// possible cost for each edge type.
    fn is_consistent<H: Heuristic>(h: H, sizes_a: &[Cost], sizes_b: &[Cost]) -> bool {
        let hi = h.build(sizes_a, sizes_b);
        let target = Pos(sizes_a.len() as I, sizes_b.len() as I);
        for i in 0..=target.0 {
            for j in 0..=target.1 {
                let u = Pos(i, j);
                let mut edges = vec![];
                if i < target.0 && j < target.1 {
                    let (sa, sb) = (sizes_a[i as usize], sizes_b[j as usize]);
                    edges.push((Pos(i + 1, j + 1), sa.abs_diff(sb)));
                }
                if i < target.0 {
                    edges.push((Pos(i + 1, j), sizes_a[i as usize]));
                }
                if j < target.1 {
                    edges.push((Pos(i, j + 1), sizes_b[j as usize]));
                }
                if edges.into_iter().any(|(v, c)| hi.h(u) > c + hi.h(v)) {
                    return false;
                }
            }
        }
        hi.h(target) == 0
    }

    #[test]
    fn gap_is_consistent() {
        let rng = &mut ChaCha8Rng::seed_from_u64(31415);
        for _ in 0..200 {
            let (a, b) = random_sizes(rng);
            assert!(is_consistent(GapCost, &a, &b), "a {a:?} b {b:?}");
            assert!(is_consistent(ZeroCost, &a, &b), "a {a:?} b {b:?}");
        }
    }

    #[test]
    fn gap_values() {
        let h = GapCost.build(&[3, 1, 4], &[2, 7]);
        assert_eq!(h.h(Pos(0, 0)), 1);
        assert_eq!(h.h(Pos(1, 0)), 4);
        assert_eq!(h.h(Pos(3, 0)), 9);
        assert_eq!(h.h(Pos(3, 2)), 0);
        assert_eq!(h.stats().h0, 1);
    }

    #[test]
    fn max_values() {
        let h = MaxCost.build(&[3, 1, 4], &[2, 7]);
        assert_eq!(h.h(Pos(0, 0)), 9);
        assert_eq!(h.h(Pos(2, 1)), 7);
        assert_eq!(h.h(Pos(3, 2)), 0);
    }

    #[test]
    fn max_overestimates_equal_suffixes() {
        // Aligning two equal sentences of size 5 costs 0, but h is 5.
        assert!(!is_consistent(MaxCost, &[5], &[5]));
        assert!(!MaxCost::IS_ADMISSIBLE);
        assert!(GapCost::IS_ADMISSIBLE);
    }
}

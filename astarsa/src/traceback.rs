//! Reconstruct the alignment path from the recorded provenance.
use crate::alignment_graph::{Provenance, StateGrid};
use crate::prelude::*;

/// Walk the provenance chain back from `target` to `(0, 0)` and return the
/// summed edge cost with the path in forward order.
///
/// Every step strictly decreases `i + j`, so a valid chain has at most
/// `m + n` steps. Anything else is reported as `BrokenProvenance`.
pub fn traceback(
    states: &StateGrid,
    target: Pos,
) -> Result<(Cost, Vec<AlignmentStep>), AlignError> {
    let bound = target.fr() as usize;
    let broken = |at: Pos, steps: usize| AlignError::BrokenProvenance { target, at, steps };

    if !states.get(target).map_or(false, |s| s.is_reached()) {
        return Err(broken(target, 0));
    }

    let mut path = Vec::with_capacity(bound);
    let mut cost = 0;
    let mut current = target;
    while current != Pos(0, 0) {
        if path.len() >= bound {
            return Err(broken(current, path.len()));
        }
        let Some(Provenance {
            parent,
            op,
            cost: edge_cost,
        }) = states.get(current).and_then(|s| s.provenance)
        else {
            return Err(broken(current, path.len()));
        };
        if op.back(&current) != Some(parent) {
            return Err(broken(current, path.len()));
        }
        path.push(AlignmentStep::new(parent, op, edge_cost));
        cost += edge_cost;
        current = parent;
    }
    path.reverse();
    Ok((cost, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(states: &mut StateGrid, pos: Pos, g: Cost, parent: Pos, op: Operation, cost: Cost) {
        states[pos].g = g;
        states[pos].provenance = Some(Provenance { parent, op, cost });
    }

    #[test]
    fn forward_order() {
        let target = Pos(2, 1);
        let mut states = StateGrid::new(target);
        states[Pos(0, 0)].g = 0;
        set(&mut states, Pos(1, 1), 2, Pos(0, 0), Operation::Align, 2);
        set(&mut states, Pos(2, 1), 5, Pos(1, 1), Operation::Delete, 3);

        let (cost, path) = traceback(&states, target).unwrap();
        assert_eq!(cost, 5);
        assert_eq!(
            path,
            [
                AlignmentStep::new(Pos(0, 0), Operation::Align, 2),
                AlignmentStep::new(Pos(1, 1), Operation::Delete, 3),
            ]
        );
    }

    #[test]
    fn unreached_target() {
        let states = StateGrid::new(Pos(1, 1));
        assert_eq!(
            traceback(&states, Pos(1, 1)),
            Err(AlignError::BrokenProvenance {
                target: Pos(1, 1),
                at: Pos(1, 1),
                steps: 0
            })
        );
    }

    #[test]
    fn missing_link() {
        let target = Pos(2, 0);
        let mut states = StateGrid::new(target);
        set(&mut states, Pos(2, 0), 4, Pos(1, 0), Operation::Delete, 4);
        assert_eq!(
            traceback(&states, target),
            Err(AlignError::BrokenProvenance {
                target,
                at: Pos(1, 0),
                steps: 1
            })
        );
    }

    #[test]
    fn parent_does_not_match_operation() {
        let target = Pos(1, 1);
        let mut states = StateGrid::new(target);
        states[Pos(0, 0)].g = 0;
        set(&mut states, Pos(1, 1), 1, Pos(0, 0), Operation::Delete, 1);
        assert!(matches!(
            traceback(&states, target),
            Err(AlignError::BrokenProvenance { at: Pos(1, 1), .. })
        ));
    }
}

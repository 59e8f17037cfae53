//! Types related to the sentence alignment graph.
use std::ops::{Index, IndexMut};

use crate::cost_model::{edit_distance, Unit, UnitMap};
use crate::prelude::*;

/// SentenceGraph, modelling the positions and transitions of the alignment
/// grid `[0, m] x [0, n]`.
///
/// The units of each sentence are extracted once, so that edge costs can be
/// computed on demand.
#[derive(Clone, Debug)]
pub struct SentenceGraph {
    units_a: Vec<Vec<Unit>>,
    units_b: Vec<Vec<Unit>>,
    pub sizes_a: Vec<Cost>,
    pub sizes_b: Vec<Cost>,
    target: Pos,
}

impl SentenceGraph {
    pub fn new(a: &Document, b: &Document, mode: UnitMode) -> SentenceGraph {
        let mut units = UnitMap::new(mode);
        let units_a = units.document_units(a);
        let units_b = units.document_units(b);
        let sizes = |units: &Vec<Vec<Unit>>| units.iter().map(|u| u.len() as Cost).collect_vec();
        SentenceGraph {
            sizes_a: sizes(&units_a),
            sizes_b: sizes(&units_b),
            units_a,
            units_b,
            target: Pos::target(a, b),
        }
    }

    #[inline]
    pub fn start(&self) -> Pos {
        Pos(0, 0)
    }

    #[inline]
    pub fn target(&self) -> Pos {
        self.target
    }

    /// The cost of taking `op` from `Pos(i, j)`.
    pub fn edge_cost(&self, Pos(i, j): Pos, op: Operation) -> Cost {
        match op {
            Operation::Align => edit_distance(&self.units_a[i as usize], &self.units_b[j as usize]),
            Operation::Delete => self.sizes_a[i as usize],
            Operation::Insert => self.sizes_b[j as usize],
        }
    }

    /// Map a function `f` over all the outgoing edges of the given position,
    /// together with their cost.
    ///
    /// The diagonal edge comes first, so that on ties in `f` the FIFO queue
    /// expands the align successor before the gap successors.
    #[inline]
    pub fn iterate_outgoing_edges<F>(&self, p: Pos, mut f: F)
    where
        F: FnMut(Pos, Operation, Cost),
    {
        for op in [Operation::Align, Operation::Delete, Operation::Insert] {
            let next = p + op.delta();
            if next.is_within(self.target) {
                f(next, op, self.edge_cost(p, op));
            }
        }
    }
}

/// How the best known cost of a position was achieved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Provenance {
    pub parent: Pos,
    pub op: Operation,
    pub cost: Cost,
}

#[derive(Clone, Copy, Debug)]
pub struct State {
    /// Best known distance from the start. `Cost::MAX` when not yet reached.
    pub g: Cost,
    /// `None` for the start and for unreached positions.
    pub provenance: Option<Provenance>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            g: Cost::MAX,
            provenance: None,
        }
    }
}

impl State {
    pub fn is_reached(&self) -> bool {
        self.g != Cost::MAX
    }
}

/// Dense `(m+1) x (n+1)` table of the best known `g` and provenance per
/// position, row-major in `i`.
#[derive(Clone, Debug)]
pub struct StateGrid {
    width: usize,
    states: Vec<State>,
}

impl StateGrid {
    pub fn new(target: Pos) -> Self {
        let width = target.1 as usize + 1;
        Self {
            width,
            states: vec![State::default(); (target.0 as usize + 1) * width],
        }
    }

    #[inline]
    fn offset(&self, Pos(i, j): Pos) -> usize {
        debug_assert!((j as usize) < self.width);
        i as usize * self.width + j as usize
    }

    pub fn get(&self, pos: Pos) -> Option<&State> {
        if (pos.1 as usize) < self.width {
            self.states.get(self.offset(pos))
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.states.len()
    }
}

impl Index<Pos> for StateGrid {
    type Output = State;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.states[self.offset(pos)]
    }
}

impl IndexMut<Pos> for StateGrid {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let idx = self.offset(pos);
        &mut self.states[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let a = Document::from_texts(["the cat", "sat"]);
        let b = Document::from_texts(["the bat"]);
        let graph = SentenceGraph::new(&a, &b, UnitMode::Character);
        assert_eq!(graph.target(), Pos(2, 1));
        assert_eq!(graph.sizes_a, [6, 3]);
        assert_eq!(graph.sizes_b, [6]);

        let mut edges = vec![];
        graph.iterate_outgoing_edges(Pos(0, 0), |p, op, c| edges.push((p, op, c)));
        assert_eq!(
            edges,
            [
                (Pos(1, 1), Operation::Align, 1),
                (Pos(1, 0), Operation::Delete, 6),
                (Pos(0, 1), Operation::Insert, 6),
            ]
        );

        let mut edges = vec![];
        graph.iterate_outgoing_edges(Pos(1, 1), |p, op, c| edges.push((p, op, c)));
        assert_eq!(edges, [(Pos(2, 1), Operation::Delete, 3)]);

        let mut edges = vec![];
        graph.iterate_outgoing_edges(graph.target(), |p, op, c| edges.push((p, op, c)));
        assert!(edges.is_empty());
    }

    #[test]
    fn token_sizes() {
        let a = Document::from_texts(["the cat", "sat"]);
        let b = Document::from_texts(["the bat sat"]);
        let graph = SentenceGraph::new(&a, &b, UnitMode::Token);
        assert_eq!(graph.sizes_a, [2, 1]);
        assert_eq!(graph.sizes_b, [3]);
        assert_eq!(graph.edge_cost(Pos(0, 0), Operation::Align), 2);
        assert_eq!(graph.edge_cost(Pos(1, 0), Operation::Align), 2);
    }

    #[test]
    fn grid() {
        let mut grid = StateGrid::new(Pos(2, 3));
        assert_eq!(grid.capacity(), 12);
        assert!(!grid[Pos(2, 3)].is_reached());
        grid[Pos(1, 2)].g = 5;
        assert_eq!(grid[Pos(1, 2)].g, 5);
        assert!(grid[Pos(1, 2)].is_reached());
        assert!(grid.get(Pos(0, 4)).is_none());
        assert!(grid.get(Pos(3, 0)).is_none());
    }
}

use std::collections::VecDeque;

use itertools::Itertools;
use petgraph::algo::dijkstra;
use petgraph::graphmap::DiGraphMap;
use strum::VariantArray;

use crate::crossing::{successors, Crossing};
use crate::puzzle::{Objective, PuzzleSize};
use crate::shore::Shore;
use crate::state::{State, StateKey};

/// Every state reachable from a start by legal, safe crossings, with one directed edge per boatload.
///
/// The [`Solver`](crate::Solver) never builds this; it exists to inspect a puzzle as a whole.
pub struct StateGraph {
    pub(crate) graph: DiGraphMap<StateKey, Crossing>,
    pub(crate) start: StateKey,
}

impl StateGraph {
    /// Explore outward from `start` until no new state appears.
    pub fn explore(start: &State) -> Self {
        let mut graph: DiGraphMap<StateKey, Crossing> = DiGraphMap::with_capacity(start.size.key_space(), 0);
        graph.add_node(start.key());

        let mut frontier = VecDeque::from([*start]);
        while let Some(state) = frontier.pop_front() {
            for (crossing, next) in successors(&state) {
                if !graph.contains_node(next.key()) {
                    frontier.push_back(next);
                }
                graph.add_edge(state.key(), next.key(), crossing);
            }
        }

        Self { graph, start: start.key() }
    }

    /// Where exploration began.
    pub fn start(&self) -> StateKey {
        self.start
    }

    /// Number of reachable states, the start included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Never true; the start is always reachable from itself.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of legal trips between reachable states.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `key` is reachable from the start.
    pub fn contains(&self, key: StateKey) -> bool {
        self.graph.contains_node(key)
    }

    /// States one trip away from `key`, in enumeration order of [`Crossing::all`].
    pub fn successors(&self, key: StateKey) -> Vec<(Crossing, StateKey)> {
        self.graph.edges(key)
            .map(|(_, to, crossing)| (*crossing, to))
            .sorted()
            .collect_vec()
    }

    /// Fewest trips from `from` to `to`, or [`None`] if `to` cannot be reached.
    pub fn distance(&self, from: StateKey, to: StateKey) -> Option<usize> {
        if !self.graph.contains_node(from) || !self.graph.contains_node(to) {
            return None;
        }

        dijkstra(&self.graph, from, Some(to), |_| 1usize).get(&to).copied()
    }

    /// Reachable states meeting `objective`, whichever side the boat ends up on.
    pub fn goals(&self, objective: &Objective, size: &PuzzleSize) -> Vec<StateKey> {
        Shore::VARIANTS.iter()
            .map(|boat| State::new(*size, objective.left.missionaries, objective.left.cannibals, *boat, *objective))
            .filter(State::is_objective)
            .map(|state| state.key())
            .filter(|key| self.graph.contains_node(*key))
            .collect_vec()
    }
}

use std::collections::{HashSet, VecDeque};
use std::fmt::{Display, Formatter};
use std::iter;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::crossing::{successors, Crossing};
use crate::puzzle::PuzzleSize;
use crate::state::{State, StateKey};

/// Reasons [`State::solve`] may fail.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum SolverFailure {
    /// Every state reachable from the start was explored without meeting the objective.
    #[error("no sequence of crossings reaches the objective")]
    Unreachable,
}

/// One entry of a [`Solution`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SolutionStep {
    /// Index of this step in the solution; the starting state is at position 0.
    pub position: usize,
    /// The state reached at this step.
    pub state: State,
    /// The boatload carried from the previous step, [`None`] at position 0.
    pub crossing: Option<Crossing>,
}

/// An ordered walk from a starting state to one meeting its objective, or nothing if no such walk exists.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    steps: Vec<SolutionStep>,
}

impl Solution {
    /// Number each state by its place in `path` and label each transition with its boatload.
    pub(crate) fn from_path(path: Vec<State>) -> Self {
        let crossings = iter::once(None)
            .chain(path.iter().tuple_windows().map(|(from, to)| Crossing::between(from, to)))
            .collect_vec();

        Self {
            steps: path.into_iter()
                .zip(crossings)
                .enumerate()
                .map(|(position, (state, crossing))| SolutionStep { position, state, crossing })
                .collect_vec(),
        }
    }

    /// Number of states, the start included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// An empty solution means the objective cannot be reached.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of boat trips taken.
    pub fn crossings(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Every step, in order.
    pub fn steps(&self) -> &[SolutionStep] {
        &self.steps
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SolutionStep> {
        self.steps.iter()
    }

    /// Iterate over the states alone, in order.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.steps.iter().map(|step| &step.state)
    }

    /// The state meeting the objective, if a solution was found.
    pub fn final_state(&self) -> Option<&State> {
        self.steps.last().map(|step| &step.state)
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a SolutionStep;
    type IntoIter = std::slice::Iter<'a, SolutionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            match step.crossing {
                None => writeln!(f, "{:>2}: {}", step.position, step.state)?,
                Some(crossing) => writeln!(f, "{:>2}: {}  ({} to the {})", step.position, step.state, crossing, step.state.boat)?,
            }
        }

        Ok(())
    }
}

/// Breadth-first search over the states of one puzzle size.
///
/// Every edge of the search graph is one boat trip, so the first path found is a shortest one.
/// The queue and visited set live only for the duration of [`Self::solve_from_state`]; a [`Solver`] may be reused freely.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Solver {
    size: PuzzleSize,
}

impl From<&State> for Solver {
    fn from(state: &State) -> Self {
        Self::new(state.size)
    }
}

impl Solver {
    /// A solver for puzzles of the given size.
    pub fn new(size: PuzzleSize) -> Self {
        Self { size }
    }

    /// The puzzle size this solver accepts.
    pub fn size(&self) -> PuzzleSize {
        self.size
    }

    /// Find a shortest sequence of safe states from `initial` to a state meeting its objective.
    ///
    /// The returned [`Solution`] includes `initial` at position 0 and the objective state last.
    /// It is empty if the objective is unreachable, or if `initial` was built for a different [`PuzzleSize`] than this solver.
    /// Identical input always yields identical output.
    pub fn solve_from_state(&self, initial: &State) -> Solution {
        if initial.size != self.size {
            warn!(solver = ?self.size, state = ?initial.size, "state does not belong to this solver's puzzle");
            return Solution::default();
        }

        debug!(start = %initial, objective = ?initial.objective, "searching");

        let mut visited: HashSet<StateKey> = HashSet::with_capacity(self.size.key_space());
        let mut queue: VecDeque<(State, Vec<State>)> = VecDeque::new();
        queue.push_back((*initial, Vec::new()));

        while let Some((state, mut path)) = queue.pop_front() {
            // the first visit to a key is along a shortest path, any later one is redundant
            if !visited.insert(state.key()) {
                continue;
            }

            path.push(state);

            if state.is_objective() {
                debug!(visited = visited.len(), crossings = path.len() - 1, "objective reached");
                return Solution::from_path(path);
            }

            trace!(%state, depth = path.len() - 1, "expanding");
            for (_, next) in successors(&state) {
                if !visited.contains(&next.key()) {
                    queue.push_back((next, path.clone()));
                }
            }
        }

        debug!(visited = visited.len(), "objective unreachable");
        Solution::default()
    }
}

impl State {
    /// Solve from this state, deferring to a [`Solver`] of this state's size.
    ///
    /// Unlike [`Solver::solve_from_state`], an unreachable objective is reported as [`SolverFailure::Unreachable`].
    pub fn solve(self) -> Result<Solution, SolverFailure> {
        let solution = Solver::from(&self).solve_from_state(&self);
        if solution.is_empty() {
            return Err(SolverFailure::Unreachable);
        }

        Ok(solution)
    }
}

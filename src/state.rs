use std::fmt::{Display, Formatter};

use itertools::repeat_n;
use serde::{Deserialize, Serialize};

use crate::puzzle::{Census, Count, Objective, PuzzleSize};
use crate::shore::Shore;

/// The part of a [`State`] that decides reachability.
/// Two states with equal keys are the same vertex of the search graph, whatever their objectives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct StateKey {
    /// Missionaries on the left shore.
    pub missionaries_left: Count,
    /// Cannibals on the left shore.
    pub cannibals_left: Count,
    /// Where the boat is moored.
    pub boat: Shore,
}

/// One snapshot of the river: occupancy of the left shore, boat position, and the goal being pursued.
///
/// Right-shore occupancy is derived from the [`PuzzleSize`].
/// States are plain values; moving the boat produces a new state (see [`Crossing::apply`](crate::Crossing::apply)).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct State {
    pub(crate) size: PuzzleSize,
    pub(crate) missionaries_left: Count,
    pub(crate) cannibals_left: Count,
    pub(crate) boat: Shore,
    pub(crate) objective: Objective,
}

impl State {
    /// Construct a state without checking it. Use a [`PuzzleBuilder`](crate::PuzzleBuilder) to reject malformed input.
    pub fn new(size: PuzzleSize, missionaries_left: Count, cannibals_left: Count, boat: Shore, objective: Objective) -> Self {
        Self { size, missionaries_left, cannibals_left, boat, objective }
    }

    /// Everybody and the boat on the left shore, aiming to get everybody across.
    pub fn initial(size: PuzzleSize) -> Self {
        Self::new(size, size.missionaries, size.cannibals, Shore::Left, Objective::all_across(size))
    }

    /// The population and boat this state belongs to.
    pub fn size(&self) -> PuzzleSize {
        self.size
    }

    /// Missionaries on the left shore.
    pub fn missionaries_left(&self) -> Count {
        self.missionaries_left
    }

    /// Cannibals on the left shore.
    pub fn cannibals_left(&self) -> Count {
        self.cannibals_left
    }

    /// Missionaries on the right shore, everyone not on the left.
    pub fn missionaries_right(&self) -> Count {
        self.size.missionaries.saturating_sub(self.missionaries_left)
    }

    /// Cannibals on the right shore.
    pub fn cannibals_right(&self) -> Count {
        self.size.cannibals.saturating_sub(self.cannibals_left)
    }

    /// Where the boat is moored.
    pub fn boat(&self) -> Shore {
        self.boat
    }

    /// The goal this state is searched towards.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Occupancy of the left shore.
    pub fn left(&self) -> Census {
        Census::new(self.missionaries_left, self.cannibals_left)
    }

    /// Occupancy of the right shore.
    pub fn right(&self) -> Census {
        Census::new(self.missionaries_right(), self.cannibals_right())
    }

    /// Occupancy of `shore`.
    pub fn on(&self, shore: Shore) -> Census {
        match shore {
            Shore::Left => self.left(),
            Shore::Right => self.right(),
        }
    }

    /// The search identity of this state.
    pub fn key(&self) -> StateKey {
        StateKey {
            missionaries_left: self.missionaries_left,
            cannibals_left: self.cannibals_left,
            boat: self.boat,
        }
    }

    /// Whether the left-shore counts fit within the population.
    pub fn is_in_bounds(&self) -> bool {
        self.missionaries_left <= self.size.missionaries && self.cannibals_left <= self.size.cannibals
    }

    /// Whether no missionary is outnumbered on either shore.
    ///
    /// A shore without missionaries is safe regardless of how many cannibals wait there.
    pub fn is_valid(&self) -> bool {
        self.left().is_safe() && self.right().is_safe()
    }

    /// Whether both shores match the objective exactly.
    pub fn is_objective(&self) -> bool {
        self.left() == self.objective.left && self.right() == self.objective.right
    }

    pub(crate) fn with_left(&self, missionaries_left: Count, cannibals_left: Count, boat: Shore) -> Self {
        Self { missionaries_left, cannibals_left, boat, ..*self }
    }
}

fn render_shore(census: Census, size: &PuzzleSize) -> String {
    repeat_n('M', census.missionaries)
        .chain(repeat_n('.', size.missionaries.saturating_sub(census.missionaries)))
        .chain(repeat_n('C', census.cannibals))
        .chain(repeat_n('.', size.cannibals.saturating_sub(census.cannibals)))
        .collect()
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.is_in_bounds() {
            return write!(f, "{}M {}C on the left of {}M {}C, boat {}",
                          self.missionaries_left, self.cannibals_left, self.size.missionaries, self.size.cannibals, self.boat);
        }

        write!(f, "{} |{}| {}",
               render_shore(self.left(), &self.size),
               match self.boat {
                   Shore::Left => "B~~~",
                   Shore::Right => "~~~B",
               },
               render_shore(self.right(), &self.size))
    }
}

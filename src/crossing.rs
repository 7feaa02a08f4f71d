use std::fmt::{Display, Formatter};

use itertools::{iproduct, Itertools};
use serde::{Deserialize, Serialize};

use crate::puzzle::Count;
use crate::shore::Shore;
use crate::state::State;

/// A boatload: who rides across in a single trip.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Crossing {
    /// Missionaries aboard.
    pub missionaries: Count,
    /// Cannibals aboard.
    pub cannibals: Count,
}

impl Crossing {
    /// Construct a boatload.
    pub const fn new(missionaries: Count, cannibals: Count) -> Self {
        Self { missionaries, cannibals }
    }

    /// Number of people aboard.
    pub fn occupants(&self) -> Count {
        self.missionaries + self.cannibals
    }

    /// Every boatload a boat seating `capacity` may carry.
    ///
    /// Ordered by missionaries, then cannibals, both ascending.
    /// Search results depend on this order when several shortest solutions exist, so it must stay fixed.
    pub fn all(capacity: Count) -> Vec<Self> {
        iproduct!(0..=capacity, 0..=capacity)
            .filter(|(m, c)| (1..=capacity).contains(&(m + c)))
            .map(|(m, c)| Self::new(m, c))
            .collect_vec()
    }

    /// Sail this boatload from wherever the boat is in `state` to the opposite shore.
    ///
    /// Returns [`None`] if the boarding shore does not hold enough people or the result leaves the population bounds.
    /// The result is *not* checked for safety; see [`State::is_valid`].
    pub fn apply(&self, state: &State) -> Option<State> {
        let (missionaries_left, cannibals_left) = match state.boat {
            Shore::Left => (
                state.missionaries_left.checked_sub(self.missionaries)?,
                state.cannibals_left.checked_sub(self.cannibals)?,
            ),
            Shore::Right => (
                state.missionaries_left.checked_add(self.missionaries)?,
                state.cannibals_left.checked_add(self.cannibals)?,
            ),
        };

        let next = state.with_left(missionaries_left, cannibals_left, state.boat.opposite());
        next.is_in_bounds().then_some(next)
    }

    /// Recover the boatload that took `from` to `to`, if a single legal trip does so.
    pub fn between(from: &State, to: &State) -> Option<Self> {
        if from.size != to.size || to.boat != from.boat.opposite() {
            return None;
        }

        let crossing = match from.boat {
            Shore::Left => Self::new(
                from.missionaries_left.checked_sub(to.missionaries_left)?,
                from.cannibals_left.checked_sub(to.cannibals_left)?,
            ),
            Shore::Right => Self::new(
                to.missionaries_left.checked_sub(from.missionaries_left)?,
                to.cannibals_left.checked_sub(from.cannibals_left)?,
            ),
        };

        (1..=from.size.boat_capacity).contains(&crossing.occupants()).then_some(crossing)
    }
}

impl Display for Crossing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}M {}C", self.missionaries, self.cannibals)
    }
}

/// Every safe state one trip away from `state`, paired with the boatload that reaches it.
pub fn successors(state: &State) -> impl Iterator<Item = (Crossing, State)> {
    let state = *state;
    Crossing::all(state.size.boat_capacity)
        .into_iter()
        .filter_map(move |crossing| crossing.apply(&state)
            .filter(State::is_valid)
            .map(|next| (crossing, next)))
}

//! Turn-by-turn play on top of the state model.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};
use thiserror::Error;
use tracing::{debug, info};

use crate::crossing::Crossing;
use crate::puzzle::Count;
use crate::shore::Shore;
use crate::solver::{Solution, SolutionStep, Solver};
use crate::state::State;

/// Someone who can ride the boat.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Passenger {
    /// Counted on each shore by the safety rule.
    Missionary,
    /// Dangerous only when outnumbering missionaries.
    Cannibal,
}

/// Reasons a [`Session`] may refuse a request.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum SessionError {
    /// Every seat is taken.
    #[error("the boat seats at most {capacity}")]
    BoatFull {
        /// Seats in the boat.
        capacity: Count,
    },
    /// Everyone of that kind on the boat's shore is already aboard, or there was nobody.
    #[error("no {passenger} is waiting on the {shore} shore")]
    NobodyToBoard {
        /// Who was asked to board.
        passenger: Passenger,
        /// Where the boat is moored.
        shore: Shore,
    },
    /// Nobody of that kind is in the boat.
    #[error("no {0} is aboard")]
    NotAboard(Passenger),
    /// The boat needs at least one rower.
    #[error("the boat cannot cross empty")]
    EmptyBoat,
    /// The boatload no longer fits the shore it boarded from.
    #[error("the boatload is larger than the shore it left")]
    Stranded,
    /// A replayed step does not follow from where the game stands.
    #[error("step {position} is not one crossing away from the current state")]
    NotAdjacent {
        /// Position of the refused step in its solution.
        position: usize,
    },
}

/// What happened when the boat reached the far shore.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CrossingOutcome {
    /// Everybody is safe and the objective is not met yet; play goes on from this state.
    Continue(State),
    /// Missionaries were outnumbered in `state`. The session has been reset.
    Eaten {
        /// Where the missionaries were lost.
        state: State,
        /// Crossings made, the fatal one included.
        moves: usize,
    },
    /// `state` meets the objective after `moves` crossings. The session has been reset.
    Won {
        /// The winning state.
        state: State,
        /// Crossings made.
        moves: usize,
    },
}

/// A game in progress, without any presentation.
///
/// Players board and unload passengers and send the boat across one trip at a time.
/// The session owns the count of trips taken; states themselves carry no counter.
#[derive(Clone, Debug)]
pub struct Session {
    initial: State,
    current: State,
    history: Vec<State>,
    passengers: Vec<Passenger>,
    moves: usize,
}

impl Session {
    /// Start a game at `initial`.
    pub fn new(initial: State) -> Self {
        Self {
            initial,
            current: initial,
            history: vec![initial],
            passengers: Vec::with_capacity(initial.size.boat_capacity),
            moves: 0,
        }
    }

    /// Where the game stands.
    pub fn state(&self) -> &State {
        &self.current
    }

    /// Crossings made since the start or the last reset.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Every state since the start or the last reset, oldest first, the current state included.
    pub fn history(&self) -> &[State] {
        &self.history
    }

    /// Who is sitting in the boat, in boarding order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    fn aboard(&self, passenger: Passenger) -> Count {
        self.passengers.iter().filter(|p| **p == passenger).count()
    }

    /// Seat someone from the shore the boat is moored at.
    pub fn board(&mut self, passenger: Passenger) -> Result<(), SessionError> {
        let capacity = self.current.size.boat_capacity;
        if self.passengers.len() >= capacity {
            return Err(SessionError::BoatFull { capacity });
        }

        let shore = self.current.boat;
        let census = self.current.on(shore);
        let waiting = match passenger {
            Passenger::Missionary => census.missionaries,
            Passenger::Cannibal => census.cannibals,
        };
        if waiting <= self.aboard(passenger) {
            return Err(SessionError::NobodyToBoard { passenger, shore });
        }

        self.passengers.push(passenger);
        debug!(%passenger, aboard = self.passengers.len(), "boarded");
        Ok(())
    }

    /// Put someone from the boat back on the shore.
    pub fn alight(&mut self, passenger: Passenger) -> Result<(), SessionError> {
        let (index, _) = self.passengers.iter()
            .find_position(|p| **p == passenger)
            .ok_or(SessionError::NotAboard(passenger))?;

        self.passengers.remove(index);
        Ok(())
    }

    /// Sail the boat with whoever is aboard.
    pub fn cross(&mut self) -> Result<CrossingOutcome, SessionError> {
        if self.passengers.is_empty() {
            return Err(SessionError::EmptyBoat);
        }

        let crossing = Crossing::new(self.aboard(Passenger::Missionary), self.aboard(Passenger::Cannibal));
        let next = crossing.apply(&self.current).ok_or(SessionError::Stranded)?;
        debug!(%crossing, to = %next.boat, "crossing");

        Ok(self.arrive(next))
    }

    /// Take one step of a replayed [`Solution`], typically one produced by [`Self::hint`].
    ///
    /// Position 0 of a solution is the state it was solved from, so replays start following at position 1.
    pub fn follow(&mut self, step: &SolutionStep) -> Result<CrossingOutcome, SessionError> {
        if Crossing::between(&self.current, &step.state).is_none() {
            return Err(SessionError::NotAdjacent { position: step.position });
        }

        // the session keeps its own objective whatever the step was solved against
        let next = self.current.with_left(step.state.missionaries_left, step.state.cannibals_left, step.state.boat);
        Ok(self.arrive(next))
    }

    fn arrive(&mut self, next: State) -> CrossingOutcome {
        self.passengers.clear();
        self.moves += 1;
        let moves = self.moves;

        if !next.is_valid() {
            info!(state = %next, moves, "missionaries eaten");
            self.reset();
            CrossingOutcome::Eaten { state: next, moves }
        } else if next.is_objective() {
            info!(state = %next, moves, "objective achieved");
            self.reset();
            CrossingOutcome::Won { state: next, moves }
        } else {
            self.current = next;
            self.history.push(next);
            CrossingOutcome::Continue(next)
        }
    }

    /// Take back the last crossing. Returns the restored state, or [`None`] at the start.
    pub fn undo(&mut self) -> Option<State> {
        if self.history.len() < 2 {
            return None;
        }

        self.history.pop();
        self.current = *self.history.last()?;
        self.passengers.clear();
        self.moves -= 1;
        Some(self.current)
    }

    /// Return to the starting state, forgetting every crossing.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.history.clear();
        self.history.push(self.initial);
        self.passengers.clear();
        self.moves = 0;
    }

    /// A shortest way to the objective from where the game stands now.
    pub fn hint(&self) -> Solution {
        Solver::from(&self.current).solve_from_state(&self.current)
    }
}

#![warn(missing_docs)]

//! # `missionaries`
//!
//! A solver for the [Missionaries and Cannibals](https://en.wikipedia.org/wiki/Missionaries_and_cannibals_problem) river crossing.
//! Begin by building a starting [`State`] with a [`PuzzleBuilder`], or take [`State::initial`] for the usual start.
//! Then call [`solve()`](crate::State::solve) or hand the state to a [`Solver`], yielding a [`Solution`]: every state from the start to the objective, in order.
//!
//! The population and boat capacity are not fixed at three, three and two; they are carried by a [`PuzzleSize`] on every state.
//!
//! # Internals
//! A state is identified for search purposes by the occupancy of the left shore and the side the boat is on, so a puzzle with
//! M missionaries and C cannibals has at most `2(M + 1)(C + 1)` states.
//! Every edge between them is one boat trip carrying between one person and the boat's capacity, and a state is kept only if no
//! missionary is outnumbered on either shore.
//! A shore with no missionaries is always safe, however many cannibals stand on it.
//!
//! With all edges of equal weight, a breadth-first search finds a shortest solution the first time it dequeues a state meeting the objective.
//! Boatloads are tried in a fixed order (see [`Crossing::all`]), so among several shortest solutions the same one is always returned.
//!
//! [`StateGraph`] materializes the whole reachable state space for inspection, and [`Session`] models play one crossing at a time.

pub use builder::{BuilderInvalidReason, PuzzleBuilder};
pub use crossing::{successors, Crossing};
pub use graph::StateGraph;
pub use puzzle::{Census, Objective, PuzzleSize};
pub use session::{CrossingOutcome, Passenger, Session, SessionError};
pub use shore::Shore;
pub use solver::{Solution, SolutionStep, Solver, SolverFailure};
pub use state::{State, StateKey};

pub mod builder;
pub(crate) mod crossing;
pub(crate) mod graph;
pub(crate) mod puzzle;
pub mod session;
pub(crate) mod shore;
pub(crate) mod solver;
pub(crate) mod state;
#[cfg(feature = "wasm")]
pub mod wasm;

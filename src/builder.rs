//! Checked construction of starting states.

use thiserror::Error;
use tracing::debug;

use crate::puzzle::{Census, Count, Objective, PuzzleSize};
use crate::shore::Shore;
use crate::state::State;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The boat seats nobody, so it can never leave.
    #[error("the boat must seat at least one person")]
    EmptyBoat,
    /// More missionaries or cannibals were placed on the left shore than exist.
    #[error("shore occupancy exceeds the population")]
    CountOutOfBounds,
    /// Missionaries are already outnumbered somewhere before the first crossing.
    #[error("the starting position already has missionaries outnumbered")]
    UnsafeStart,
    /// The objective's two shores do not add up to the population, so it can never be met.
    #[error("the objective does not account for exactly the whole population")]
    ObjectiveMismatch,
}

/// A builder for starting [`State`]s which checks what [`State::new`] takes on trust.
///
/// Starts from everybody and the boat on the left shore with the objective of getting everybody across.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct PuzzleBuilder {
    size: PuzzleSize,
    left: Census,
    boat: Shore,
    objective: Objective,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::with_size(PuzzleSize::CLASSIC)
    }
}

impl PuzzleBuilder {
    /// Construct a new [`Self`] for the given population and boat.
    ///
    /// May cause the builder to enter an [`EmptyBoat`](BuilderInvalidReason::EmptyBoat) invalid state if the boat seats nobody,
    /// or an [`UnsafeStart`](BuilderInvalidReason::UnsafeStart) invalid state if the cannibals outnumber the missionaries from the outset.
    pub fn with_size(size: PuzzleSize) -> Self {
        let mut builder = Self {
            size,
            left: Census::new(size.missionaries, size.cannibals),
            boat: Shore::Left,
            objective: Objective::all_across(size),
            invalid_reasons: Default::default(),
        };

        if size.boat_capacity == 0 {
            builder.invalid_reasons.push(BuilderInvalidReason::EmptyBoat);
            return builder;
        }

        builder.check_start();
        builder
    }

    /// Set who starts on the left shore. Everybody else starts on the right.
    ///
    /// May cause the builder to enter a [`CountOutOfBounds`](BuilderInvalidReason::CountOutOfBounds) invalid state if either count exceeds the population,
    /// or an [`UnsafeStart`](BuilderInvalidReason::UnsafeStart) invalid state if missionaries are outnumbered on either shore.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn left_shore(&mut self, missionaries: Count, cannibals: Count) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if missionaries > self.size.missionaries || cannibals > self.size.cannibals {
            self.invalid_reasons.push(BuilderInvalidReason::CountOutOfBounds);
            return self;
        }

        self.left = Census::new(missionaries, cannibals);
        self.check_start();
        self
    }

    /// Set which shore the boat starts on.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn boat(&mut self, shore: Shore) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.boat = shore;
        self
    }

    /// Replace the objective.
    ///
    /// May cause the builder to enter an [`ObjectiveMismatch`](BuilderInvalidReason::ObjectiveMismatch) invalid state if `objective` does not account for the population.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn objective(&mut self, objective: Objective) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !objective.is_consistent_with(&self.size) {
            self.invalid_reasons.push(BuilderInvalidReason::ObjectiveMismatch);
            return self;
        }

        self.objective = objective;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`State`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<State, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            debug!(reasons = ?self.invalid_reasons, "refusing to build");
            return Err(&self.invalid_reasons);
        }

        Ok(State::new(self.size, self.left.missionaries, self.left.cannibals, self.boat, self.objective))
    }

    fn check_start(&mut self) {
        let start = State::new(self.size, self.left.missionaries, self.left.cannibals, self.boat, self.objective);
        if !start.is_valid() {
            self.invalid_reasons.push(BuilderInvalidReason::UnsafeStart);
        }
    }
}

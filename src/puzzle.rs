use serde::{Deserialize, Serialize};

pub(crate) type Count = usize;

/// The fixed dimensions of one puzzle instance: how many of each party exist and how many people the boat seats.
///
/// Every [`State`](crate::State) carries its size, so a search generalizes to any population without code changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PuzzleSize {
    /// Total number of missionaries across both shores.
    pub missionaries: Count,
    /// Total number of cannibals across both shores.
    pub cannibals: Count,
    /// Most people the boat may carry in one crossing. A crossing always carries at least one.
    pub boat_capacity: Count,
}

impl PuzzleSize {
    /// Three missionaries, three cannibals and a boat for two.
    pub const CLASSIC: Self = Self { missionaries: 3, cannibals: 3, boat_capacity: 2 };

    /// Construct a size with the given population and boat capacity.
    pub const fn new(missionaries: Count, cannibals: Count, boat_capacity: Count) -> Self {
        Self { missionaries, cannibals, boat_capacity }
    }

    /// Number of distinct search identities for this size, an upper bound on the states any search visits.
    pub fn key_space(&self) -> usize {
        (self.missionaries + 1) * (self.cannibals + 1) * 2
    }
}

impl Default for PuzzleSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Who stands on one shore.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Census {
    /// Missionaries present.
    pub missionaries: Count,
    /// Cannibals present.
    pub cannibals: Count,
}

impl Census {
    /// Construct a census.
    pub const fn new(missionaries: Count, cannibals: Count) -> Self {
        Self { missionaries, cannibals }
    }

    /// Missionaries are eaten only when present and outnumbered.
    pub fn is_safe(&self) -> bool {
        self.missionaries == 0 || self.cannibals <= self.missionaries
    }
}

impl From<(Count, Count)> for Census {
    fn from(value: (Count, Count)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// The distribution of people across both shores that ends the puzzle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Objective {
    /// Required occupancy of the left shore.
    pub left: Census,
    /// Required occupancy of the right shore.
    pub right: Census,
}

impl Objective {
    /// Construct an objective from `(missionaries, cannibals)` pairs for the left and right shores.
    pub fn new(left: (Count, Count), right: (Count, Count)) -> Self {
        Self { left: Census::from(left), right: Census::from(right) }
    }

    /// Everybody on the right shore, the usual goal.
    pub fn all_across(size: PuzzleSize) -> Self {
        Self::new((0, 0), (size.missionaries, size.cannibals))
    }

    /// Whether the two shores of this objective add up to the population of `size`.
    ///
    /// An inconsistent objective can never be met, so a search for it always comes back empty.
    pub fn is_consistent_with(&self, size: &PuzzleSize) -> bool {
        self.left.missionaries + self.right.missionaries == size.missionaries
            && self.left.cannibals + self.right.cannibals == size.cannibals
    }
}

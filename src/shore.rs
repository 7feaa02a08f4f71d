use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

/// One of the two banks of the river. The boat is always moored at exactly one of them.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Shore {
    /// Where everybody usually starts.
    Left,
    /// The far bank.
    Right,
}

impl Shore {
    /// The bank across the river from `self`.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

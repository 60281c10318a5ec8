//! Move and location value types.

use serde::{Deserialize, Serialize};

/// A position a card can occupy or move between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Tableau pile, 0..8.
    Cascade(u8),

    /// Free cell, 0..4.
    Cell(u8),

    /// Foundation for the suit with this index, 0..4.
    Home(u8),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Cascade(i) => write!(f, "cascade{i}"),
            Location::Cell(i) => write!(f, "cell{i}"),
            Location::Home(i) => write!(f, "home{i}"),
        }
    }
}

/// One single-card move. Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the card is taken from.
    pub from: Location,

    /// Where it is placed.
    pub to: Location,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

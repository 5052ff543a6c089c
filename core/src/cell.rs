use serde::{Deserialize, Serialize};

/// Content of a generated board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Mine,
    /// Safe cell with the number of adjacent mines (0 to 8).
    Safe(u8),
}

impl BoardCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Safe(count) => Some(count),
        }
    }

    /// Classic numeric encoding: `-1` for a mine, otherwise the adjacent count.
    pub const fn to_count(self) -> i8 {
        match self {
            Self::Mine => -1,
            Self::Safe(count) => count as i8,
        }
    }
}

/// What the player currently sees at a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    /// The mine that ended the game.
    TriggeredMine,
}

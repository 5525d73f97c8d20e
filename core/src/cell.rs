use serde::{Deserialize, Serialize};

/// Player-facing status of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Covered,
    Revealed,
    Flagged,
}

impl CellStatus {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// A single grid cell as stored by the board.
///
/// `adjacent_mines` is only meaningful once a safe cell has been revealed, it is filled in at reveal time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) status: CellStatus,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn status(self) -> CellStatus {
        self.status
    }

    /// Number of mines around this cell, `None` until the cell is revealed as safe.
    pub const fn adjacent_mines(self) -> Option<u8> {
        if self.status.is_revealed() && !self.has_mine {
            Some(self.adjacent_mines)
        } else {
            None
        }
    }
}

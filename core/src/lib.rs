#![no_std]

//! Board engine for a single-player mine-avoidance puzzle.
//!
//! A [`Board`] owns the whole grid state machine: deferred mine placement with a safe first move, adjacency counts,
//! flood reveal of empty regions, flags and win/loss detection. A [`Session`] owns the current board and replaces it on
//! reset. Front-ends render a [`BoardView`].

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;
mod view;

/// Validated board parameters.
///
/// The only way to get one is through [`GameConfig::new`] or the default, so a board always has room for a safe first
/// move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT: Self = Self::new_unchecked(10, 10, 20);

    pub(crate) const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Checks that the board is at least 1x1 and leaves one cell free for the first move.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(ConfigError::EmptyBoard.into());
        }
        let config = Self::new_unchecked(width, height, mines);
        let max = config.max_mines();
        if mines > max {
            return Err(ConfigError::TooManyMines { mines, max }.into());
        }
        Ok(config)
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// Board size as `(rows, cols)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(1)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords))
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where the mines are on a board, independent of what the player has seen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn empty(size: Coord2) -> Self {
        Self {
            mine_mask: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds(coords));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    /// Layout size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Sets or clears a mine, keeping the cached count in sync.
    pub(crate) fn set_mine(&mut self, coords: Coord2, is_mine: bool) {
        let slot = &mut self.mine_mask[coords.to_nd_index()];
        match (*slot, is_mine) {
            (false, true) => self.mine_count += 1,
            (true, false) => self.mine_count -= 1,
            _ => {}
        }
        *slot = is_mine;
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagResult {
    Unchanged,
    Flagged,
    Unflagged,
}

impl FlagResult {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    Unchanged,
    Continuing,
    Lost,
    Won,
}

impl RevealResult {
    pub const fn has_update(self) -> bool {
        use RevealResult::*;
        match self {
            Unchanged => false,
            Continuing => true,
            Lost => true,
            Won => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

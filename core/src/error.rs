use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigError),
    #[error("Coordinates {0:?} are out of bounds")]
    OutOfBounds(Coord2),
    #[error("Game already over, no new moves are accepted")]
    GameAlreadyOver,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1")]
    EmptyBoard,
    #[error("{mines} mines do not fit, at most {max} leave room for the first move")]
    TooManyMines { mines: CellCount, max: CellCount },
    #[error("mine layout does not match the board configuration")]
    LayoutMismatch,
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfiguration(err)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

use alloc::vec::Vec;
use ndarray::Array2;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game's grid and everything needed to play it.
///
/// Mines are not placed until the first reveal so that the first target can be kept safe. Once the game is won or
/// lost every move fails with [`GameError::GameAlreadyOver`]; a new game means a new board.
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    rng: SmallRng,
    state: GameState,
    first_move_taken: bool,
    mines_placed: bool,
    revealed_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Creates a covered board without mines, they get placed by the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            rng: SmallRng::seed_from_u64(seed),
            state: GameState::InProgress,
            first_move_taken: false,
            mines_placed: false,
            revealed_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        }
    }

    /// Validates the parameters and creates a fresh board.
    pub fn initialize(width: Coord, height: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Ok(Self::new(GameConfig::new(width, height, mines)?, seed))
    }

    /// Creates a board with a predetermined mine layout.
    ///
    /// First-move safety still applies: if the first reveal lands on a mine, that mine is moved elsewhere.
    pub fn with_layout(config: GameConfig, layout: MineLayout, seed: u64) -> Result<Self> {
        let mut board = Self::new(config, seed);
        board.place_mines_with(layout)?;
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn first_move_taken(&self) -> bool {
        self.first_move_taken
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags, negative when the player placed more flags than there are mines.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.flagged_count)
    }

    /// Number of safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn neighbors(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.config.validate_coords(coords)?;
        Ok(neighbors(coords, self.size()))
    }

    /// Iterates every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Places the configured number of mines uniformly at random, unless they are already placed.
    pub fn place_mines(&mut self) -> Result<()> {
        self.place_mines_with(UniformMineGenerator)
    }

    pub fn place_mines_with<G: MineGenerator>(&mut self, generator: G) -> Result<()> {
        self.check_in_progress()?;
        if self.mines_placed {
            return Ok(());
        }

        let layout = generator.generate(&self.config, &mut self.rng)?;
        for coords in layout.iter_mines() {
            self.cells[coords.to_nd_index()].has_mine = true;
        }
        self.mines_placed = true;
        log::debug!(
            "placed {} mines on a {}x{} board",
            layout.mine_count(),
            self.config.width(),
            self.config.height()
        );
        Ok(())
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagResult> {
        use CellStatus::*;

        let coords = self.config.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        Ok(match cell.status {
            Covered => {
                cell.status = Flagged;
                self.flagged_count += 1;
                FlagResult::Flagged
            }
            Flagged => {
                cell.status = Covered;
                self.flagged_count -= 1;
                FlagResult::Unflagged
            }
            Revealed => FlagResult::Unchanged,
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let coords = self.config.validate_coords(coords)?;
        self.check_in_progress()?;

        if !self.cells[coords.to_nd_index()].status.is_covered() {
            return Ok(RevealResult::Unchanged);
        }

        if !self.first_move_taken {
            self.make_first_move_safe(coords)?;
        }

        if self.cells[coords.to_nd_index()].has_mine {
            self.triggered_mine = Some(coords);
            self.end_game(GameState::Lost);
            return Ok(RevealResult::Lost);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(GameState::Won);
            Ok(RevealResult::Won)
        } else {
            Ok(RevealResult::Continuing)
        }
    }

    fn make_first_move_safe(&mut self, target: Coord2) -> Result<()> {
        self.place_mines()?;
        self.first_move_taken = true;

        if !self.cells[target.to_nd_index()].has_mine {
            return Ok(());
        }

        let mut layout = self.mine_layout();
        match relocate_mine(&mut layout, target, &mut self.rng) {
            Some(to) => {
                self.cells[target.to_nd_index()].has_mine = false;
                self.cells[to.to_nd_index()].has_mine = true;
                log::debug!("first move on a mine, moved it from {target:?} to {to:?}");
            }
            None => {
                log::warn!("no free cell to move the mine at {target:?} to, first move is not safe");
            }
        }
        Ok(())
    }

    /// Reveals a safe cell and, when it has no adjacent mines, the whole empty region around it.
    ///
    /// A cell is marked revealed before its neighbors are pushed and anything no longer covered is skipped when popped,
    /// so each cell is opened at most once and the worklist stays bounded by the board size.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            let current = self.cells[coords.to_nd_index()];
            if !current.status.is_covered() || current.has_mine {
                continue;
            }

            let adjacent_mines = self.count_adjacent_mines(coords);
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.status = CellStatus::Revealed;
            cell.adjacent_mines = adjacent_mines;
            self.revealed_count += 1;

            if adjacent_mines == 0 {
                to_visit.extend(
                    neighbors(coords, self.size())
                        .filter(|&pos| self.cells[pos.to_nd_index()].status.is_covered()),
                );
            }
        }
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        self.state = state;
        // flagged mines keep their flag, everything else is shown
        for cell in self.cells.iter_mut() {
            if cell.has_mine && cell.status.is_covered() {
                cell.status = CellStatus::Revealed;
            }
        }
        log::debug!("game over: {state:?}");
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine)
            .count() as u8
    }

    fn mine_layout(&self) -> MineLayout {
        MineLayout::from_mine_mask(self.cells.map(|cell| cell.has_mine))
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

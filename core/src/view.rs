use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player gets to see of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Covered,
    Flagged,
    Revealed(u8),
    Mine,
    Exploded,
    // only shown after a loss:
    WrongFlag,
}

/// Render-ready snapshot of a board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub state: GameState,
    pub mine_count: CellCount,
    pub mines_left: i32,
    pub cells: Array2<CellView>,
}

impl BoardView {
    /// Builds the view, `show_mines` additionally exposes covered mines while the game is running.
    pub fn from_board(board: &Board, show_mines: bool) -> Self {
        let size = board.size();
        let state = board.state();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Covered);

        for (coords, cell) in board.iter_cells() {
            cells[coords.to_nd_index()] = match (cell.status(), cell.has_mine()) {
                (CellStatus::Revealed, true) if board.triggered_mine() == Some(coords) => {
                    CellView::Exploded
                }
                (CellStatus::Revealed, true) => CellView::Mine,
                (CellStatus::Revealed, false) => CellView::Revealed(cell.adjacent_mines),
                (CellStatus::Flagged, false) if state == GameState::Lost => CellView::WrongFlag,
                (CellStatus::Flagged, _) => CellView::Flagged,
                (CellStatus::Covered, true) if show_mines => CellView::Mine,
                (CellStatus::Covered, _) => CellView::Covered,
            };
        }

        Self {
            size,
            state,
            mine_count: board.mine_count(),
            mines_left: board.mines_left(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self::from_board(board, false)
    }
}

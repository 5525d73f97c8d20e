use std::io::{self, Write};

use minefield_core::{BoardView, CellView, GameState};

fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Covered => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
        CellView::WrongFlag => 'x',
    }
}

/// Draws the board as a text grid with row and column numbers.
pub fn draw<W: Write>(view: &BoardView, out: &mut W) -> io::Result<()> {
    let (rows, cols) = view.size;

    writeln!(out, "mines left: {}", view.mines_left)?;
    write!(out, "   ")?;
    for col in 0..cols {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{row:>3}")?;
        for col in 0..cols {
            write!(out, "{:>3}", symbol(view.cell_at((row, col))))?;
        }
        writeln!(out)?;
    }

    match view.state {
        GameState::InProgress => {}
        GameState::Won => writeln!(out, "All clear, you won! Type n for a new game.")?,
        GameState::Lost => writeln!(out, "Boom! Game over. Type n for a new game.")?,
    }
    Ok(())
}

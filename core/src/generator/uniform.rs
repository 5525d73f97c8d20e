use ndarray::Array2;
use rand::Rng;

use super::*;

/// Places every mine on a distinct cell, each free cell equally likely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformMineGenerator;

impl MineGenerator for UniformMineGenerator {
    fn generate<R: Rng>(self, config: &GameConfig, rng: &mut R) -> Result<MineLayout> {
        let total_cells = config.total_cells();

        // optimize for full boards
        if config.mines() >= total_cells {
            if config.mines() > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines(),
                    total_cells
                );
            }
            return Ok(MineLayout::from_mine_mask(Array2::from_elem(
                config.size().to_nd_index(),
                true,
            )));
        }

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut free_cells = total_cells;
        let mut mines_placed = 0;

        while mines_placed < config.mines() {
            // pick the n-th free cell, skipping over the ones already mined
            let mut place = rng.random_range(0..free_cells) as usize;
            for (i, cell) in mines.iter_mut().enumerate() {
                if *cell {
                    place += 1;
                }
                if i == place {
                    *cell = true;
                    mines_placed += 1;
                    free_cells -= 1;
                    break;
                }
            }
        }

        let layout = MineLayout::from_mine_mask(mines);
        // double check mine count
        if layout.mine_count() != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        Ok(layout)
    }
}

/// Moves the mine at `from` to a uniformly chosen cell that is neither mined nor `from`.
///
/// Returns the new position, or `None` when every other cell already holds a mine, in which case the layout is left
/// untouched.
pub fn relocate_mine<R: Rng>(layout: &mut MineLayout, from: Coord2, rng: &mut R) -> Option<Coord2> {
    if !layout.contains_mine(from) {
        return None;
    }

    // `from` itself is mined so every free cell is a candidate
    let candidates = layout.total_cells() - layout.mine_count();
    if candidates == 0 {
        return None;
    }

    let pick = rng.random_range(0..candidates) as usize;
    let (rows, cols) = layout.size();
    let to = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| !layout.contains_mine(coords))
        .nth(pick)?;

    layout.set_mine(from, false);
    layout.set_mine(to, true);
    Some(to)
}

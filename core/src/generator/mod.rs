use rand::Rng;

use crate::*;
pub use uniform::*;

mod uniform;

/// Decides where the mines go on a fresh board.
pub trait MineGenerator {
    fn generate<R: Rng>(self, config: &GameConfig, rng: &mut R) -> Result<MineLayout>;
}

/// A fixed layout generates itself, as long as it fits the board.
impl MineGenerator for MineLayout {
    fn generate<R: Rng>(self, config: &GameConfig, _rng: &mut R) -> Result<MineLayout> {
        if self.size() != config.size() || self.mine_count() != config.mines() {
            return Err(ConfigError::LayoutMismatch.into());
        }
        Ok(self)
    }
}

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::*;

/// Owns the board of the game currently being played.
///
/// Each new game gets its own seed drawn from the session seed, so a whole session replays the same way.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rng: SmallRng,
    board: Board,
    games_started: u32,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(config, rng.random());
        Self {
            config,
            rng,
            board,
            games_started: 1,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn view(&self, show_mines: bool) -> BoardView {
        BoardView::from_board(&self.board, show_mines)
    }

    /// Throws the current board away and starts over with the same settings.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config, self.rng.random());
        self.games_started += 1;
        log::debug!("new game #{} with {:?}", self.games_started, self.config);
    }

    /// Applies new settings and starts a new game, an invalid configuration leaves the session untouched.
    pub fn reconfigure(&mut self, width: Coord, height: Coord, mines: CellCount) -> Result<()> {
        self.config = GameConfig::new(width, height, mines)?;
        self.reset();
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        self.board.reveal(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagResult> {
        self.board.toggle_flag(coords)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_replaces_board() {
        let mut session = Session::new(GameConfig::new(5, 5, 3).unwrap(), 11);
        session.reveal((2, 2)).unwrap();
        session.toggle_flag((0, 0)).ok();
        assert!(session.board().first_move_taken());

        session.reset();

        assert_eq!(session.games_started(), 2);
        assert!(!session.board().first_move_taken());
        assert_eq!(session.board().state(), GameState::InProgress);
        assert_eq!(session.board().flag_count(), 0);
    }

    #[test]
    fn reset_after_game_over_allows_moves_again() {
        let mut session = Session::new(GameConfig::new(2, 1, 1).unwrap(), 4);
        assert_eq!(session.reveal((0, 0)).unwrap(), RevealResult::Won);
        assert_eq!(session.reveal((0, 1)), Err(GameError::GameAlreadyOver));

        session.reset();

        assert_eq!(session.reveal((0, 1)).unwrap(), RevealResult::Won);
    }

    #[test]
    fn reconfigure_applies_valid_settings() {
        let mut session = Session::default();

        session.reconfigure(8, 4, 6).unwrap();

        assert_eq!(session.config(), GameConfig::new(8, 4, 6).unwrap());
        assert_eq!(session.board().size(), (4, 8));
        assert_eq!(session.games_started(), 2);
    }

    #[test]
    fn reconfigure_keeps_game_on_invalid_settings() {
        let mut session = Session::default();
        session.reveal((0, 0)).unwrap();

        let err = session.reconfigure(3, 3, 9).unwrap_err();

        assert!(matches!(err, GameError::InvalidConfiguration(_)));
        assert_eq!(session.config(), GameConfig::default());
        assert!(session.board().first_move_taken());
        assert_eq!(session.games_started(), 1);
    }

    #[test]
    fn same_seed_replays_same_games() {
        let config = GameConfig::new(9, 9, 10).unwrap();
        let mut a = Session::new(config, 42);
        let mut b = Session::new(config, 42);

        for _ in 0..3 {
            a.reveal((4, 4)).unwrap();
            b.reveal((4, 4)).unwrap();
            assert_eq!(a.view(true), b.view(true));
            a.reset();
            b.reset();
        }
    }
}

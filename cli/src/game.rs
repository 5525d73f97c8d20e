use std::io::{BufRead, Write};

use anyhow::Context;
use minefield_core::{GameError, Session};

use crate::{
    command::{Command, CommandError, HELP},
    render,
};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Redraw,
    Stay,
    Quit,
}

impl Flow {
    fn redraw_if(changed: bool) -> Self {
        if changed { Self::Redraw } else { Self::Stay }
    }
}

/// Reads commands line by line until `q` or end of input, drawing the board after every change.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    show_mines: bool,
) -> anyhow::Result<()> {
    render::draw(&session.view(show_mines), out)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}, type h for help")?;
                continue;
            }
        };

        match step(session, command, out)? {
            Flow::Redraw => render::draw(&session.view(show_mines), out)?,
            Flow::Stay => {}
            Flow::Quit => break,
        }
    }

    Ok(())
}

fn step<W: Write>(session: &mut Session, command: Command, out: &mut W) -> anyhow::Result<Flow> {
    let flow = match command {
        Command::Reveal(coords) => match session.reveal(coords) {
            Ok(result) => {
                log::debug!("reveal {coords:?}: {result:?}");
                if result.is_finished() {
                    log::info!("game #{} ended: {result:?}", session.games_started());
                }
                Flow::redraw_if(result.has_update())
            }
            Err(err) => report(err, out)?,
        },
        Command::Flag(coords) => match session.toggle_flag(coords) {
            Ok(result) => Flow::redraw_if(result.has_update()),
            Err(err) => report(err, out)?,
        },
        Command::NewGame => {
            session.reset();
            Flow::Redraw
        }
        Command::Settings {
            width,
            height,
            mines,
        } => match session.reconfigure(width, height, mines) {
            Ok(()) => Flow::Redraw,
            Err(err) => report(err, out)?,
        },
        Command::Help => {
            writeln!(out, "{HELP}")?;
            Flow::Stay
        }
        Command::Quit => Flow::Quit,
    };
    Ok(flow)
}

fn report<W: Write>(err: GameError, out: &mut W) -> anyhow::Result<Flow> {
    match err {
        GameError::GameAlreadyOver => writeln!(out, "The game is over, type n to start a new one")?,
        GameError::OutOfBounds((row, col)) => writeln!(out, "({row}, {col}) is off the board")?,
        GameError::InvalidConfiguration(reason) => {
            log::warn!("rejected settings: {reason}");
            writeln!(out, "Settings not applied: {reason}")?
        }
    }
    Ok(Flow::Stay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minefield_core::{GameConfig, GameState};

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        play(session, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn two_cell_board_is_won_by_first_reveal() {
        let mut session = Session::new(GameConfig::new(2, 1, 1).unwrap(), 3);

        let text = run(&mut session, "r 0 0\nr 0 1\nq\nr 0 0\n");

        assert_eq!(session.board().state(), GameState::Won);
        assert!(text.contains("you won"));
        assert!(text.contains("The game is over"));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let mut session = Session::new(GameConfig::new(3, 3, 1).unwrap(), 3);

        let text = run(&mut session, "\nboom\nr 9 9\nf 1\nf 0 0\n");

        assert!(text.contains("unknown command `boom`"));
        assert!(text.contains("(9, 9) is off the board"));
        assert!(text.contains("`flag` expects 2 numbers"));
        assert_eq!(session.board().flag_count(), 1);
    }

    #[test]
    fn settings_command_validates_and_resets() {
        let mut session = Session::default();

        let text = run(&mut session, "s 2 2 4\ns 4 3 2\n");

        assert!(text.contains("Settings not applied"));
        assert_eq!(session.config(), GameConfig::new(4, 3, 2).unwrap());
        assert_eq!(session.games_started(), 2);
    }

    #[test]
    fn repeated_moves_do_not_redraw() {
        let mut session = Session::new(GameConfig::new(4, 1, 1).unwrap(), 0);
        let mut out = Vec::new();

        assert_eq!(step(&mut session, Command::Flag((0, 0)), &mut out).unwrap(), Flow::Redraw);
        assert_eq!(step(&mut session, Command::Reveal((0, 0)), &mut out).unwrap(), Flow::Stay);
        assert_eq!(step(&mut session, Command::Flag((0, 0)), &mut out).unwrap(), Flow::Redraw);
        assert_eq!(step(&mut session, Command::Help, &mut out).unwrap(), Flow::Stay);
        assert_eq!(step(&mut session, Command::Quit, &mut out).unwrap(), Flow::Quit);
    }

    #[test]
    fn new_game_and_help() {
        let mut session = Session::new(GameConfig::new(5, 5, 3).unwrap(), 8);

        let text = run(&mut session, "r 2 2\nn\nh\n");

        assert_eq!(session.games_started(), 2);
        assert!(!session.board().first_move_taken());
        assert!(text.contains("commands:"));
    }
}

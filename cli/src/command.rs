use std::str::FromStr;

use minefield_core::{CellCount, Coord, Coord2};
use thiserror::Error;

/// A single line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Settings {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected} numbers")]
    WrongArgCount {
        command: &'static str,
        expected: usize,
    },
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
commands:
  r ROW COL              reveal a cell
  f ROW COL              toggle a flag
  n                      start a new game
  s WIDTH HEIGHT MINES   apply new settings and start a new game
  h                      show this help
  q                      quit";

fn parse_number<T: FromStr>(arg: &str) -> Result<T, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArgCount { command, expected })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                expect_args("reveal", &args, 2)?;
                Ok(Self::Reveal((parse_number(args[0])?, parse_number(args[1])?)))
            }
            "f" | "flag" => {
                expect_args("flag", &args, 2)?;
                Ok(Self::Flag((parse_number(args[0])?, parse_number(args[1])?)))
            }
            "s" | "settings" => {
                expect_args("settings", &args, 3)?;
                Ok(Self::Settings {
                    width: parse_number(args[0])?,
                    height: parse_number(args[1])?,
                    mines: parse_number(args[2])?,
                })
            }
            "n" | "new" => Ok(Self::NewGame),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

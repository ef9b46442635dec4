use core::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  r ROW COL  - reveal cell (1-based)
  f ROW COL  - toggle flag (1-based)
  n          - new game
  d          - dump mine layout (debug)
  h          - show this help
  q          - quit";

/// One line of player input, coordinates already converted to 0-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(i32, i32),
    Flag(i32, i32),
    NewGame,
    Dump,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type 'h' for help")]
    Unknown(String),
    #[error("Usage: {0} ROW COL")]
    MissingCoords(&'static str),
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
}

fn parse_coord(text: &str) -> Result<i32, CommandError> {
    text.parse::<i32>()
        .map(|value| value.saturating_sub(1))
        .map_err(|_| CommandError::InvalidNumber(text.to_owned()))
}

fn parse_coords<'a>(
    name: &'static str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<(i32, i32), CommandError> {
    match (args.next(), args.next()) {
        (Some(row), Some(col)) => Ok((parse_coord(row)?, parse_coord(col)?)),
        _ => Err(CommandError::MissingCoords(name)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };

        Ok(match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let (row, col) = parse_coords("r", parts)?;
                Command::Reveal(row, col)
            }
            "f" | "flag" => {
                let (row, col) = parse_coords("f", parts)?;
                Command::Flag(row, col)
            }
            "n" | "new" => Command::NewGame,
            "d" | "dump" => Command::Dump,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        })
    }
}

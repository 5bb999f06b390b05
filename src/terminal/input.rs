//! Parsing of typed commands and cell references.

use std::str::FromStr;
use unbeatable_tictactoe::Position;

/// Word commands accepted at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Command {
    /// Start a new game.
    #[strum(serialize = "restart", serialize = "r", serialize = "new")]
    Restart,
    /// Leave the program.
    #[strum(serialize = "quit", serialize = "q", serialize = "exit")]
    Quit,
    /// Show the help text.
    #[strum(serialize = "help", serialize = "h", serialize = "?")]
    Help,
}

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A word command.
    Command(Command),
    /// A cell to play.
    Move(Position),
    /// Blank line.
    Nothing,
}

/// Parses a line typed at the prompt for a board of `dimensions`.
///
/// Cells are either their 1-based number as printed on the board, or a
/// 1-based `row,column` pair (`row column` also works). Cell numbers past
/// the last cell are not understood; range checking of pairs is left to
/// the session.
pub fn parse_line(line: &str, dimensions: usize) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return Some(Input::Nothing);
    }
    if let Ok(command) = Command::from_str(line) {
        return Some(Input::Command(command));
    }

    let numbers = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers.as_slice() {
        [cell] if *cell >= 1 => Position::from_index(cell - 1, dimensions).map(Input::Move),
        [row, column] if *row >= 1 && *column >= 1 => {
            Some(Input::Move(Position::new(row - 1, column - 1)))
        }
        _ => None,
    }
}

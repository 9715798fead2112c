use sapper_core::{Action, Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r <row> <col>   reveal a cell
  f <row> <col>   toggle a flag
  n               new game
  h               this help
  q               quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command {0:?}, type 'h' for help")]
    UnknownCommand(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Parses one input line, blank lines are `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Command::Play(Action::Reveal(parse_coords(&mut words)?)),
        "f" | "flag" => Command::Play(Action::ToggleFlag(parse_coords(&mut words)?)),
        "n" | "new" | "reset" => Command::Play(Action::Reset),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return Err(InputError::UnknownCommand(word.to_string())),
    };

    if let Some(extra) = words.next() {
        return Err(InputError::TrailingInput(extra.to_string()));
    }
    Ok(Some(command))
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, InputError> {
    let row = parse_coord(words.next())?;
    let col = parse_coord(words.next())?;
    Ok((row, col))
}

fn parse_coord(word: Option<&str>) -> Result<Coord, InputError> {
    let word = word.ok_or(InputError::MissingCoords)?;
    word.parse()
        .map_err(|_| InputError::InvalidCoord(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            parse_command("r 3 4"),
            Ok(Some(Command::Play(Action::Reveal((3, 4)))))
        );
        assert_eq!(
            parse_command("  FLAG 0 12 "),
            Ok(Some(Command::Play(Action::ToggleFlag((0, 12)))))
        );
        assert_eq!(parse_command("n"), Ok(Some(Command::Play(Action::Reset))));
        assert_eq!(parse_command("q"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("?"), Ok(Some(Command::Help)));
    }

    #[test]
    fn blank_line_is_nothing() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_command("x 1 1"),
            Err(InputError::UnknownCommand("x".into()))
        );
        assert_eq!(parse_command("r 1"), Err(InputError::MissingCoords));
        assert_eq!(
            parse_command("f -1 2"),
            Err(InputError::InvalidCoord("-1".into()))
        );
        assert_eq!(
            parse_command("r 1 2 3"),
            Err(InputError::TrailingInput("3".into()))
        );
        assert_eq!(
            parse_command("q now"),
            Err(InputError::TrailingInput("now".into()))
        );
    }
}

//! Parsing of the interactive move prompt.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// `piece` is 0-based; the game checks the rest.
    Place { piece: usize, row: i32, col: i32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("enter a piece, row and column such as '1 4 2'")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("expected 3 numbers, got {0}")]
    WrongCount(usize),
    #[error("pieces are numbered from 1")]
    PieceZero,
}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Accepts `q`/`quit`/`exit`, or three single digits for piece, row and
/// column. Whitespace is ignored, so `1 4 2` and `142` are the same move.
/// The piece number is 1-based.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if QUIT_WORDS.iter().any(|w| line.eq_ignore_ascii_case(w)) {
        return Ok(Command::Quit);
    }

    let numbers: Vec<i32> = line
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            ch.to_digit(10)
                .map(|d| d as i32)
                .ok_or_else(|| InputError::NotANumber(ch.to_string()))
        })
        .collect::<Result<_, _>>()?;

    let [piece, row, col] = numbers[..] else {
        return Err(InputError::WrongCount(numbers.len()));
    };
    if piece < 1 {
        return Err(InputError::PieceZero);
    }

    Ok(Command::Place {
        piece: (piece - 1) as usize,
        row,
        col,
    })
}

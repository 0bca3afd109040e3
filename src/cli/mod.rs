//! Command-line presentation: board rendering and coordinate notation
//!
//! Columns are lettered `A`..`J` (x), rows numbered `1`..`10` (y).

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use crate::core::{Coord, BOARD_SIZE};

/// Errors from parsing a coordinate such as `B7`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCoordError {
    #[error("empty input")]
    Empty,
    #[error("invalid column '{0}' - must be a letter A-J")]
    BadColumn(char),
    #[error("invalid row '{0}' - must be a number 1-10")]
    BadRow(String),
}

/// Format a coordinate in board notation, e.g. `(2, 3)` as `C4`.
pub fn format_coord(at: Coord) -> String {
    let col = (b'A' + at.x as u8) as char;
    format!("{}{}", col, at.y + 1)
}

/// Parse board notation (`A1`..`J10`, case-insensitive) into a coordinate.
pub fn parse_coord(input: &str) -> Result<Coord, ParseCoordError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(ParseCoordError::Empty)?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() || (col_ch as u8 - b'A') as usize >= BOARD_SIZE {
        return Err(ParseCoordError::BadColumn(col_ch));
    }
    let row_str = chars.as_str();
    if !row_str.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseCoordError::BadRow(row_str.to_string()));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| ParseCoordError::BadRow(row_str.to_string()))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(ParseCoordError::BadRow(row_str.to_string()));
    }
    Ok(Coord::new((col_ch as u8 - b'A') as usize, row - 1))
}

//! Text-layout-to-Board parser.
//!
//! A layout is eight rows of eight characters, top row first:
//! `-` or `.` for an empty square, `r`/`b` for Red/Blue Men and `R`/`B` for
//! kings. Leading/trailing whitespace on each row and blank lines are
//! ignored, so layouts can be written as indented string literals.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{GRID_COLS, GRID_ROWS};
use crate::game_state::checkers_types::*;

pub fn parse_layout(layout: &str) -> CheckersResult<Board> {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.len() != GRID_ROWS {
        return Err(CheckersError::InvalidLayout(format!(
            "expected {GRID_ROWS} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != GRID_COLS {
            return Err(CheckersError::InvalidLayout(format!(
                "row {row} has {} squares, expected {GRID_COLS}",
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            if let Some(piece) = piece_from_layout_char(ch)
                .map_err(|_| CheckersError::InvalidLayout(format!("unexpected '{ch}' at row {row}, column {col}")))?
            {
                board.place(Square::new(row as i8, col as i8), piece)?;
            }
        }
    }

    Ok(board)
}

/// `Ok(None)` for an empty square, `Err(())` for an unknown character.
fn piece_from_layout_char(ch: char) -> Result<Option<Piece>, ()> {
    match ch {
        '-' | '.' => Ok(None),
        'r' => Ok(Some(Piece::man(Side::Red))),
        'b' => Ok(Some(Piece::man(Side::Blue))),
        'R' => Ok(Some(Piece::king(Side::Red))),
        'B' => Ok(Some(Piece::king(Side::Blue))),
        _ => Err(()),
    }
}

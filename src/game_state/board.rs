//! Fixed 8x8 grid of cells.
//!
//! The board only stores pieces; whose turn it is and how many tokens each
//! side has left live in the engine. All lookups take a `Square` and treat
//! off-board coordinates as "nothing there" rather than indexing out of range.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::{GRID_COLS, GRID_ROWS};
use crate::game_state::checkers_types::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; GRID_COLS]; GRID_ROWS],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Three rows of Men per side on the playable squares, middle rows empty.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for row in 0..GRID_ROWS {
            let owner = match row {
                0..=2 => Side::Red,
                5..=7 => Side::Blue,
                _ => continue,
            };
            for col in 0..GRID_COLS {
                if (row + col) % 2 == 1 {
                    board.cells[row][col] = Cell::Occupied(Piece::man(owner));
                }
            }
        }
        board
    }

    /// Raw grid, row-major, for renderers.
    #[inline]
    pub fn rows(&self) -> &[[Cell; GRID_COLS]; GRID_ROWS] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, square: Square) -> Option<Cell> {
        square.grid_index().map(|(row, col)| self.cells[row][col])
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cell(square).and_then(Cell::piece)
    }

    /// True only for on-board squares without a piece.
    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.cell(square).is_some_and(Cell::is_empty)
    }

    pub fn place(&mut self, square: Square, piece: Piece) -> CheckersResult<()> {
        let (row, col) = square.grid_index().ok_or(CheckersError::OffBoard(square))?;
        self.cells[row][col] = Cell::Occupied(piece);
        Ok(())
    }

    /// Remove and return the piece on `square`, if any.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid_index()?;
        let piece = self.cells[row][col].piece();
        self.cells[row][col] = Cell::Empty;
        piece
    }

    /// Crown the Man on `square`. Returns false when there is no Man to crown.
    pub fn crown(&mut self, square: Square) -> bool {
        let Some((row, col)) = square.grid_index() else {
            return false;
        };
        match self.cells[row][col] {
            Cell::Occupied(Piece {
                owner,
                rank: Rank::Man,
            }) => {
                self.cells[row][col] = Cell::Occupied(Piece::king(owner));
                true
            }
            _ => false,
        }
    }

    /// Squares holding a piece of `side`, row-major.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| match cell {
                Cell::Occupied(piece) if piece.owner == side => {
                    Some(Square::new(row as i8, col as i8))
                }
                _ => None,
            })
        })
    }

    pub fn count_pieces(&self, side: Side) -> u8 {
        self.squares_of(side).count() as u8
    }

    pub fn count_kings(&self, side: Side) -> u8 {
        self.squares_of(side)
            .filter(|sq| self.piece_at(*sq).is_some_and(Piece::is_king))
            .count() as u8
    }
}

//! Value types shared by the board model, the move rules and the engine.
//!
//! Pieces are tagged values (`Piece { owner, rank }`) rather than encoded
//! characters; the text form only exists at the parser/generator boundary.

use std::fmt;
use std::str::FromStr;

use crate::errors::CheckersError;
use crate::game_state::checkers_rules::{GRID_COLS, GRID_ROWS};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Row delta of a forward step. Red advances down the board, Blue up.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    /// Row on which a Man of this side is promoted.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Red => 7,
            Side::Blue => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

impl FromStr for Side {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Side::Red),
            "blue" | "b" => Ok(Side::Blue),
            other => Err(CheckersError::InvalidConfig(format!("unknown side '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    #[inline]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Whether this piece may travel along the given row direction.
    ///
    /// Kings go anywhere; Men only toward the opponent's edge.
    #[inline]
    pub const fn may_step(self, row_delta: i8) -> bool {
        self.is_king() || row_delta.signum() == self.owner.forward()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Board coordinate. Row 0 is the top edge, column 0 the left edge.
///
/// Coordinates are signed and unchecked so that off-board input can be
/// represented and rejected by the rules instead of indexing out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0
            && (self.row as usize) < GRID_ROWS
            && self.col >= 0
            && (self.col as usize) < GRID_COLS
    }

    /// Grid indices, or `None` when the square is off the board.
    #[inline]
    pub fn grid_index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    #[inline]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Self {
        Self {
            row: self.row.saturating_add(row_delta),
            col: self.col.saturating_add(col_delta),
        }
    }

    /// Square halfway between `self` and `other`.
    #[inline]
    pub const fn midpoint(self, other: Square) -> Self {
        Self {
            row: ((self.row as i16 + other.row as i16) / 2) as i8,
            col: ((self.col as i16 + other.col as i16) / 2) as i8,
        }
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single enumerated transition: one step or one jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Outcome of a validation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveResult {
    pub legal: bool,
    pub captured: Option<Square>,
}

impl MoveResult {
    pub const ILLEGAL: MoveResult = MoveResult {
        legal: false,
        captured: None,
    };

    #[inline]
    pub const fn legal(captured: Option<Square>) -> Self {
        Self {
            legal: true,
            captured,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won(Side),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Won(Side),
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    #[inline]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Won(side) => Some(Outcome::Won(side)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

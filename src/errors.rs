//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type of the crate. Rule violations are
//! ordinary, recoverable values: the engine rejects the input, leaves its
//! state untouched and the caller asks the player again. Parsing and
//! configuration variants cover the tooling around the engine.

use std::error::Error;
use std::fmt;

use crate::game_state::checkers_types::{Outcome, Square};

pub type CheckersResult<T> = Result<T, CheckersError>;

/// Unified error type for the checkers engine.
///
/// Every variant carries the squares (or text) involved so callers can log
/// or display a precise reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// A coordinate outside the 8x8 grid was supplied.
    OffBoard(Square),

    /// The source square of a selection or move holds no piece.
    EmptySquare(Square),

    /// The piece on the square belongs to the side not on move.
    NotYourPiece(Square),

    /// Destinations must be empty; there are no captures by landing.
    OccupiedDestination(Square),

    /// The move is neither a one-square nor a two-square diagonal.
    IllegalShape { from: Square, to: Square },

    /// A Man tried to move away from the opponent's edge.
    WrongDirection { from: Square, to: Square },

    /// A two-square jump whose middle square holds no opponent piece.
    NothingToCapture(Square),

    /// A capture chain is open; only the given piece may move, and only by
    /// capturing.
    ContinuationRequired(Square),

    /// `apply_move` was called with a captured square that does not match
    /// what validation reports for the same move.
    CaptureMismatch {
        expected: Option<Square>,
        supplied: Option<Square>,
    },

    /// The game has ended; only a reset is accepted.
    GameOver(Outcome),

    /// A text layout could not be turned into a board.
    InvalidLayout(String),

    /// A configuration value could not be interpreted.
    InvalidConfig(String),
}

impl fmt::Display for CheckersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckersError::OffBoard(square) => write!(f, "square {square} is off the board"),
            CheckersError::EmptySquare(square) => write!(f, "no piece on {square}"),
            CheckersError::NotYourPiece(square) => {
                write!(f, "the piece on {square} belongs to the other side")
            }
            CheckersError::OccupiedDestination(square) => {
                write!(f, "destination {square} is occupied")
            }
            CheckersError::IllegalShape { from, to } => {
                write!(f, "{from} -> {to} is not a diagonal step or jump")
            }
            CheckersError::WrongDirection { from, to } => {
                write!(f, "a man cannot move backwards from {from} to {to}")
            }
            CheckersError::NothingToCapture(square) => {
                write!(f, "no opponent piece to capture on {square}")
            }
            CheckersError::ContinuationRequired(square) => {
                write!(f, "the piece on {square} must continue capturing or stop")
            }
            CheckersError::CaptureMismatch { expected, supplied } => write!(
                f,
                "captured square mismatch: move captures {expected:?}, caller supplied {supplied:?}"
            ),
            CheckersError::GameOver(outcome) => write!(f, "game is over ({outcome})"),
            CheckersError::InvalidLayout(msg) => write!(f, "invalid board layout: {msg}"),
            CheckersError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl Error for CheckersError {}

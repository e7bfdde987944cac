//! Legality of a single step or jump.
//!
//! `check_move` returns the reason a move is rejected so the engine can log
//! it; `validate_move` flattens that into the `MoveResult` handed to callers.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::turn_state::TurnState;

/// Check a move of `side` from `from` to `to`.
///
/// On success returns the square of the captured piece (`None` for a simple
/// step). The open capture chain in `turn` only binds `turn.current_side`.
pub fn check_move(
    board: &Board,
    turn: &TurnState,
    side: Side,
    from: Square,
    to: Square,
) -> CheckersResult<Option<Square>> {
    if !from.is_on_board() {
        return Err(CheckersError::OffBoard(from));
    }
    if !to.is_on_board() {
        return Err(CheckersError::OffBoard(to));
    }

    let piece = board
        .piece_at(from)
        .ok_or(CheckersError::EmptySquare(from))?;
    if piece.owner != side {
        return Err(CheckersError::NotYourPiece(from));
    }

    let locked = if side == turn.current_side {
        turn.continuation_square()
    } else {
        None
    };
    if let Some(locked) = locked {
        if locked != from {
            return Err(CheckersError::ContinuationRequired(locked));
        }
    }

    if !board.is_vacant(to) {
        return Err(CheckersError::OccupiedDestination(to));
    }

    let row_delta = to.row - from.row;
    let col_delta = to.col - from.col;
    let distance = row_delta.abs();
    if distance != col_delta.abs() || !(1..=2).contains(&distance) {
        return Err(CheckersError::IllegalShape { from, to });
    }

    if !piece.may_step(row_delta) {
        return Err(CheckersError::WrongDirection { from, to });
    }

    if distance == 1 {
        // A piece in the middle of a chain may only keep jumping.
        if locked.is_some() {
            return Err(CheckersError::ContinuationRequired(from));
        }
        return Ok(None);
    }

    let jumped = from.midpoint(to);
    match board.piece_at(jumped) {
        Some(victim) if victim.owner == side.opposite() => Ok(Some(jumped)),
        _ => Err(CheckersError::NothingToCapture(jumped)),
    }
}

#[inline]
pub fn validate_move(
    board: &Board,
    turn: &TurnState,
    side: Side,
    from: Square,
    to: Square,
) -> MoveResult {
    match check_move(board, turn, side, from, to) {
        Ok(captured) => MoveResult::legal(captured),
        Err(_) => MoveResult::ILLEGAL,
    }
}

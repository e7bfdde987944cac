//! Legal move enumeration.
//!
//! Every piece of the requested side is probed in the four diagonal
//! directions at step and jump distance; whatever `validate_move` accepts is
//! collected. Sources are visited row-major, then in `DIRECTIONS` order, the
//! step before the jump within one direction.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::DIRECTIONS;
use crate::game_state::checkers_types::*;
use crate::game_state::turn_state::TurnState;
use crate::move_generation::move_validation::validate_move;

pub fn enumerate_moves(board: &Board, turn: &TurnState, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    for from in board.squares_of(side) {
        generate_piece_moves(board, turn, side, from, &mut out);
    }
    out
}

/// Moves available to the piece on `from`, appended to `out`.
pub fn generate_piece_moves(
    board: &Board,
    turn: &TurnState,
    side: Side,
    from: Square,
    out: &mut Vec<Move>,
) {
    for (row_step, col_step) in DIRECTIONS {
        for distance in 1..=2 {
            let to = from.offset(row_step * distance, col_step * distance);
            if !to.is_on_board() {
                break;
            }
            let result = validate_move(board, turn, side, from, to);
            if result.legal {
                out.push(Move {
                    from,
                    to,
                    captured: result.captured,
                });
            }
        }
    }
}

/// Captures the piece on `from` could make, ignoring any open chain.
pub fn captures_from(board: &Board, side: Side, from: Square) -> Vec<Move> {
    let unlocked = TurnState::new(side);
    let mut out = Vec::with_capacity(4);
    generate_piece_moves(board, &unlocked, side, from, &mut out);
    out.retain(Move::is_capture);
    out
}

pub fn has_legal_move(board: &Board, turn: &TurnState, side: Side) -> bool {
    let mut scratch = Vec::with_capacity(8);
    board.squares_of(side).any(|from| {
        scratch.clear();
        generate_piece_moves(board, turn, side, from, &mut scratch);
        !scratch.is_empty()
    })
}

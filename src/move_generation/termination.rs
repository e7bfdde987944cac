//! End-of-game detection.
//!
//! Rules are applied in a fixed order: a side to move without any legal move
//! loses, then a side without tokens loses, then one token each is a draw.
//! Repetition and no-progress draws are not detected.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::turn_state::TurnState;
use crate::move_generation::move_enumeration::has_legal_move;

pub fn evaluate_termination(board: &Board, turn: &TurnState, tokens: [u8; 2]) -> GameStatus {
    let next = turn.current_side;
    if !has_legal_move(board, turn, next) {
        return GameStatus::Won(next.opposite());
    }

    for side in Side::ALL {
        if tokens[side.index()] == 0 {
            return GameStatus::Won(side.opposite());
        }
    }

    if tokens == [1, 1] {
        return GameStatus::Draw;
    }

    GameStatus::Ongoing
}

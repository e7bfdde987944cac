//! Terminal-oriented board renderer.
//!
//! Produces a labelled grid for the text front-end, tests and diagnostics.
//! Red pieces are `r`, Blue `b`, kings upper case; the selected piece is
//! wrapped in brackets and playable empty squares are drawn as `·`.

use crate::engine::rule_engine::RuleEngine;
use crate::game_state::checkers_types::*;
use crate::utils::board_generator::cell_to_layout_char;

pub fn render_board(engine: &RuleEngine) -> String {
    let mut out = String::new();
    out.push_str("   0  1  2  3  4  5  6  7\n");

    let selection = engine.selection();
    for (row, cells) in engine.board().rows().iter().enumerate() {
        out.push_str(&format!("{row} "));
        for (col, cell) in cells.iter().enumerate() {
            let square = Square::new(row as i8, col as i8);
            let glyph = match cell {
                Cell::Empty if (row + col) % 2 == 1 => '·',
                Cell::Empty => ' ',
                occupied => cell_to_layout_char(*occupied),
            };
            if selection == Some(square) {
                out.push('[');
                out.push(glyph);
                out.push(']');
            } else {
                out.push(' ');
                out.push(glyph);
                out.push(' ');
            }
        }
        out.push_str(&format!(" {row}\n"));
    }

    out.push_str("   0  1  2  3  4  5  6  7");
    out
}

//! Presentation-side input routing.
//!
//! Maps pointer pixels to squares and turns a click on a square into the
//! right engine action: the first click picks a piece up, a click on a
//! target moves it, a click on the picked-up piece puts it down (ending an
//! open capture chain), and any click after the game is over starts a new
//! one.

use crate::engine::rule_engine::{MoveReport, RuleEngine};
use crate::errors::CheckersError;
use crate::game_state::checkers_rules::{GRID_COLS, GRID_ROWS};
use crate::game_state::checkers_types::*;

/// Pixel size of the drawn board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub width: f64,
    pub height: f64,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
        }
    }
}

impl BoardGeometry {
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.width / GRID_COLS as f64
    }

    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.height / GRID_ROWS as f64
    }

    /// Square under the pointer, `None` outside the board.
    pub fn square_at(&self, x: f64, y: f64) -> Option<Square> {
        if !(x >= 0.0 && y >= 0.0 && x < self.width && y < self.height) {
            return None;
        }
        let row = (y / self.cell_height()).floor() as i8;
        let col = (x / self.cell_width()).floor() as i8;
        let square = Square::new(row, col);
        square.is_on_board().then_some(square)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Square),
    Moved(MoveReport),
    /// The selection was dropped; carries the outcome if that ended the game.
    Deselected(Option<Outcome>),
    Rejected(CheckersError),
    Reset,
    /// The pointer was outside the board.
    Ignored,
}

pub fn handle_square_click(engine: &mut RuleEngine, square: Square) -> ClickOutcome {
    if engine.status().is_terminal() {
        engine.reset();
        return ClickOutcome::Reset;
    }

    let Some(selected) = engine.selection() else {
        return match engine.select(square) {
            Ok(()) => ClickOutcome::Selected(square),
            Err(err) => ClickOutcome::Rejected(err),
        };
    };

    if square == selected {
        return ClickOutcome::Deselected(engine.deselect());
    }

    let result = engine
        .check_move(selected, square)
        .and_then(|captured| engine.apply_move_detailed(selected, square, captured));
    match result {
        Ok(report) => ClickOutcome::Moved(report),
        Err(err) => ClickOutcome::Rejected(err),
    }
}

pub fn handle_pointer_click(
    engine: &mut RuleEngine,
    geometry: &BoardGeometry,
    x: f64,
    y: f64,
) -> ClickOutcome {
    match geometry.square_at(x, y) {
        Some(square) => handle_square_click(engine, square),
        None => ClickOutcome::Ignored,
    }
}

/// Window caption for the current state.
pub fn caption(engine: &RuleEngine) -> String {
    match engine.status().outcome() {
        Some(outcome) => outcome.to_string(),
        None => format!("{}'s turn", engine.current_side()),
    }
}

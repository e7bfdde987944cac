use crate::game_state::checkers_types::{Side, Square};

/// Whose turn it is, which piece is picked up, and whether a capture chain
/// is still open.
///
/// `forced_continuation` implies `selection.is_some()`: the selected piece is
/// the one that has to keep capturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub current_side: Side,
    pub selection: Option<Square>,
    pub forced_continuation: bool,
}

impl TurnState {
    #[inline]
    pub const fn new(current_side: Side) -> Self {
        Self {
            current_side,
            selection: None,
            forced_continuation: false,
        }
    }

    /// Hand the move to the other side and drop any selection or open chain.
    #[inline]
    pub fn advance(&mut self) {
        self.current_side = self.current_side.opposite();
        self.selection = None;
        self.forced_continuation = false;
    }

    /// Square the side to move is locked to, if a capture chain is open.
    #[inline]
    pub fn continuation_square(&self) -> Option<Square> {
        if self.forced_continuation {
            self.selection
        } else {
            None
        }
    }
}

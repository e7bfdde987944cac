//! Canonical checkers-rule constants.
//!
//! Board dimensions, the per-side token count and the starting layout in the
//! crate's text layout form (see `utils::board_parser`).

pub const GRID_ROWS: usize = 8;
pub const GRID_COLS: usize = 8;

/// Men per side in the starting position (three rows of four).
pub const TOKENS_PER_SIDE: u8 = 12;

/// Standard starting position. Pieces stand on squares where `row + col` is odd.
pub const STARTING_LAYOUT: &str = "\
-r-r-r-r
r-r-r-r-
-r-r-r-r
--------
--------
b-b-b-b-
-b-b-b-b
b-b-b-b-";

/// Diagonal directions in enumeration order: down-right, up-left, down-left,
/// up-right.
pub const DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;

/// Board to text layout, the inverse of `parse_layout`.
pub fn generate_layout(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell_to_layout_char(*cell)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cell_to_layout_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '-',
        Cell::Occupied(Piece { owner, rank }) => {
            let base = match owner {
                Side::Red => 'r',
                Side::Blue => 'b',
            };
            match rank {
                Rank::Man => base,
                Rank::King => base.to_ascii_uppercase(),
            }
        }
    }
}

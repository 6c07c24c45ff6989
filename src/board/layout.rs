use crate::board::piece::{Color, Piece};
use crate::board::Board;
use crate::core::square::Square;

/// Rows holding each side's men at the start of a game.
pub const BLACK_HOME_ROWS: [u8; 3] = [0, 1, 2];
pub const RED_HOME_ROWS: [u8; 3] = [5, 6, 7];

/// The standard opening: twelve Black men on rows 0-2, twelve Red men on rows 5-7.
pub fn standard() -> Board {
    let mut board = Board::empty();
    for sq in Square::playable() {
        let color = if BLACK_HOME_ROWS.contains(&sq.row()) {
            Color::Black
        } else if RED_HOME_ROWS.contains(&sq.row()) {
            Color::Red
        } else {
            continue;
        };
        board.cells[sq.index()] = Some(Piece::man(color));
    }
    board
}

//! Mandatory-capture policy.
//!
//! If any piece of the side to move can jump, that side must jump: simple moves are illegal
//! for every one of its pieces that turn. The same check on a single square decides whether a
//! piece that just captured has to keep going.

use crate::board::piece::Color;
use crate::board::Board;
use crate::core::square::Square;

use super::movegen::can_jump;

/// True iff some piece of `color` has at least one legal jump.
pub fn has_any_capture(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .any(|(sq, p)| p.color == color && can_jump(board, sq, p))
}

/// True iff the piece on `sq` itself has at least one legal jump.
pub fn has_capture_from(board: &Board, sq: Square) -> bool {
    board.get(sq).is_some_and(|p| can_jump(board, sq, p))
}

/// Squares of the `color` pieces that can capture right now, in board order.
pub fn capturing_squares(board: &Board, color: Color) -> Vec<Square> {
    board
        .pieces()
        .filter(|&(sq, p)| p.color == color && can_jump(board, sq, p))
        .map(|(sq, _)| sq)
        .collect()
}

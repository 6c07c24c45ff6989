use crate::board::piece::Color;
use crate::board::Board;
use crate::core::square::Square;

use super::captures::has_any_capture;
use super::movegen::{can_jump, can_step, destinations, Destinations, Move};

/// Destinations for `from` as the side to move may actually use them.
///
/// Empty when `from` does not hold a `turn` piece or a chain is pending elsewhere. While any
/// capture exists for `turn` (always the case during a chain), the simple set is empty.
pub fn legal_destinations(
    board: &Board,
    turn: Color,
    pending_chain: Option<Square>,
    from: Square,
) -> Destinations {
    if pending_chain.is_some_and(|required| required != from) {
        return Destinations::default();
    }
    match board.get(from) {
        Some(p) if p.color == turn => {}
        _ => return Destinations::default(),
    }

    let mut dests = destinations(board, from);
    if pending_chain.is_some() || has_any_capture(board, turn) {
        log::trace!("forced capture for {turn}: dropping simple moves from {from}");
        dests.simple.clear();
    }
    dests
}

/// Every legal move for the side to move, grouped by source square in board order.
pub fn legal_moves(board: &Board, turn: Color, pending_chain: Option<Square>) -> Vec<Move> {
    let mut out = Vec::new();
    let sources: Vec<Square> = match pending_chain {
        Some(sq) => vec![sq],
        None => board.squares_of(turn).collect(),
    };
    for from in sources {
        let dests = legal_destinations(board, turn, pending_chain, from);
        out.extend(dests.moves(from));
    }
    out
}

/// True iff `color` has any step or jump at all. A side without one has lost.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .any(|(sq, p)| p.color == color && (can_step(board, sq, p) || can_jump(board, sq, p)))
}

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::board::piece::Piece;
use crate::board::Board;
use crate::core::square::Square;

/// A single step or single jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the opponent piece removed by a jump; `None` for a simple move.
    pub captured: Option<Square>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(c) => write!(f, "{}x{} (takes {})", self.from, self.to, c),
            None => write!(f, "{}-{}", self.from, self.to),
        }
    }
}

/// Reachable squares for one piece, split into simple steps and jumps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations {
    pub simple: BTreeSet<Square>,
    /// Landing square -> square of the captured piece.
    pub jumps: BTreeMap<Square, Square>,
}

impl Destinations {
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.jumps.is_empty()
    }

    pub fn contains(&self, to: Square) -> bool {
        self.simple.contains(&to) || self.jumps.contains_key(&to)
    }

    /// Every target square, jumps and steps together, in board order.
    pub fn targets(&self) -> BTreeSet<Square> {
        self.simple
            .iter()
            .chain(self.jumps.keys())
            .copied()
            .collect()
    }

    /// Materialise as moves out of `from`.
    pub fn moves(&self, from: Square) -> impl Iterator<Item = Move> + '_ {
        let jumps = self.jumps.iter().map(move |(&to, &captured)| Move {
            from,
            to,
            captured: Some(captured),
        });
        let steps = self.simple.iter().map(move |&to| Move {
            from,
            to,
            captured: None,
        });
        jumps.chain(steps)
    }
}

/// Unfiltered destinations for the piece on `from` (empty if the square is empty).
///
/// No mandatory-capture or chain filtering happens here; see [`crate::rules::legal`].
pub fn destinations(board: &Board, from: Square) -> Destinations {
    let Some(piece) = board.get(from) else {
        return Destinations::default();
    };
    Destinations {
        simple: simple_targets(board, from, piece),
        jumps: jump_targets(board, from, piece),
    }
}

/// One-square diagonal steps onto empty squares.
pub fn simple_targets(board: &Board, from: Square, piece: Piece) -> BTreeSet<Square> {
    piece
        .directions()
        .iter()
        .filter_map(|&dir| from.offset(dir))
        .filter(|&to| board.is_empty(to))
        .collect()
}

/// Jumps over an adjacent opponent piece onto an empty landing square.
pub fn jump_targets(board: &Board, from: Square, piece: Piece) -> BTreeMap<Square, Square> {
    let mut out = BTreeMap::new();
    for &dir in piece.directions() {
        let (Some(mid), Some(landing)) = (from.offset(dir), from.offset(dir * 2)) else {
            continue;
        };
        if !board.is_empty(landing) {
            continue;
        }
        if matches!(board.get(mid), Some(p) if p.color != piece.color) {
            out.insert(landing, mid);
        }
    }
    out
}

/// True iff the piece on `from` has at least one jump. Cheaper than building the map.
pub fn can_jump(board: &Board, from: Square, piece: Piece) -> bool {
    piece.directions().iter().any(|&dir| {
        match (from.offset(dir), from.offset(dir * 2)) {
            (Some(mid), Some(landing)) => {
                board.is_empty(landing)
                    && matches!(board.get(mid), Some(p) if p.color != piece.color)
            }
            _ => false,
        }
    })
}

/// True iff the piece on `from` has at least one simple step.
pub fn can_step(board: &Board, from: Square, piece: Piece) -> bool {
    piece
        .directions()
        .iter()
        .filter_map(|&dir| from.offset(dir))
        .any(|to| board.is_empty(to))
}

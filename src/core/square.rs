use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::coord::Coord;
use crate::error::BoardError;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square of the 8x8 board, packed as `row * 8 + col`.
///
/// A `Square` is always on the board; out-of-range coordinates are rejected when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "SquareRepr")]
pub struct Square(u8);

#[derive(Serialize)]
struct SquareRepr {
    row: u8,
    col: u8,
}

impl From<Square> for SquareRepr {
    fn from(sq: Square) -> Self {
        SquareRepr {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Square, BoardError> {
        Self::from_signed(i32::from(row), i32::from(col))
    }

    /// Build from raw (possibly negative) coordinates, as delivered by an input adapter.
    pub fn from_signed(row: i32, col: i32) -> Result<Square, BoardError> {
        let size = i32::from(BOARD_SIZE);
        if !(0..size).contains(&row) || !(0..size).contains(&col) {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(Square((row * size + col) as u8))
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Dark squares, the only ones pieces may stand on.
    #[inline]
    pub fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// The square `delta` away, or `None` if that falls off the board.
    pub fn offset(self, delta: Coord) -> Option<Square> {
        let row = i32::from(self.row()) + i32::from(delta.row);
        let col = i32::from(self.col()) + i32::from(delta.col);
        Square::from_signed(row, col).ok()
    }

    /// Displacement from `self` to `to`.
    pub fn delta_to(self, to: Square) -> Coord {
        Coord::new(
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }

    /// The 32 dark squares in row-major order.
    pub fn playable() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_playable())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

/// Accepts `r,c`, `(r,c)` and the compact `rc` form, e.g. `5,0`, `(5,0)` or `50`.
impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparsable = || BoardError::Unparsable(s.to_string());
        let body = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();

        let (row, col) = match body.split_once(',') {
            Some((r, c)) => (r.trim(), c.trim()),
            None if body.len() == 2 && body.is_char_boundary(1) => body.split_at(1),
            None => return Err(unparsable()),
        };

        let row: i32 = row.parse().map_err(|_| unparsable())?;
        let col: i32 = col.parse().map_err(|_| unparsable())?;
        Square::from_signed(row, col)
    }
}

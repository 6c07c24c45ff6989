use std::ops::Mul;

/// A signed step on the board, measured in rows and columns.
///
/// Row 0 is Black's back rank and row 7 is Red's; column grows to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// True iff this is a pure diagonal displacement (`|row| == |col| > 0`).
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.row != 0 && self.row.abs() == self.col.abs()
    }

    /// Number of squares travelled along a diagonal, if the step is diagonal.
    #[inline]
    pub fn diagonal_len(self) -> Option<u8> {
        if self.is_diagonal() {
            Some(self.row.unsigned_abs())
        } else {
            None
        }
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i8) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// The 4 diagonal steps, in `(-1,-1), (-1,1), (1,-1), (1,1)` order.
pub const DIAGONALS: [Coord; 4] = [
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];

use std::fmt;

use serde::Serialize;

use crate::core::coord::{Coord, DIAGONALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Row step of a forward move: Red heads for row 0, Black for row 7.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// The opponent's back rank, where this color's men are crowned.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Black => "Black",
        }
    }

    /// Label used by the turn indicator.
    pub fn player_label(self) -> &'static str {
        match self {
            Color::Red => "Player 1 (Red)",
            Color::Black => "Player 2 (Black)",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            is_king: false,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            is_king: true,
        }
    }

    /// Diagonal directions this piece may travel in.
    ///
    /// Men only go forward for their color; kings use all four diagonals.
    pub fn directions(self) -> &'static [Coord] {
        match (self.is_king, self.color) {
            (true, _) => &DIAGONALS,
            (false, Color::Red) => &RED_FORWARD,
            (false, Color::Black) => &BLACK_FORWARD,
        }
    }
}

const RED_FORWARD: [Coord; 2] = [DIAGONALS[0], DIAGONALS[1]];
const BLACK_FORWARD: [Coord; 2] = [DIAGONALS[2], DIAGONALS[3]];

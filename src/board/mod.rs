//! The 8x8 board: a square-indexed grid of optional pieces.
//!
//! The board knows nothing about turns or scoring. It only guarantees that pieces stand on
//! dark squares and that a piece is moved, never copied.

pub mod layout;
pub mod piece;

use crate::core::square::{Square, BOARD_SIZE};
use crate::error::BoardError;

use self::piece::{Color, Piece};

const CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }

    /// Build a board from explicit placements.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::empty();
        for (sq, piece) in pieces {
            board.place(sq, piece)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Lookup by raw coordinates; fails for anything off the board.
    pub fn get_at(&self, row: i32, col: i32) -> Result<Option<Piece>, BoardError> {
        Ok(self.get(Square::from_signed(row, col)?))
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), BoardError> {
        if !sq.is_playable() {
            return Err(BoardError::Unplayable(sq));
        }
        let cell = &mut self.cells[sq.index()];
        if cell.is_some() {
            return Err(BoardError::Occupied(sq));
        }
        *cell = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, sq: Square) -> Result<Piece, BoardError> {
        self.cells[sq.index()]
            .take()
            .ok_or(BoardError::EmptySource(sq))
    }

    /// Relocate the piece on `from` to `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        if self.cells[from.index()].is_none() {
            return Err(BoardError::EmptySource(from));
        }
        if self.cells[to.index()].is_some() {
            return Err(BoardError::Occupied(to));
        }
        if !to.is_playable() {
            return Err(BoardError::Unplayable(to));
        }
        self.cells[to.index()] = self.cells[from.index()].take();
        Ok(())
    }

    /// Crown the piece on `sq`. Returns whether it was a man before; kings are left alone.
    pub fn promote(&mut self, sq: Square) -> Result<bool, BoardError> {
        let piece = self.cells[sq.index()]
            .as_mut()
            .ok_or(BoardError::EmptySource(sq))?;
        let crowned = !piece.is_king;
        piece.is_king = true;
        Ok(crowned)
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Squares holding a piece of `color`, in row-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn count_of(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.color == color)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

use serde::Serialize;

use crate::board::layout;
use crate::board::piece::Color;
use crate::board::Board;
use crate::core::square::Square;
use crate::error::{MoveError, SourceProblem};
use crate::rules::captures::{has_any_capture, has_capture_from};
use crate::rules::legal::{has_any_move, legal_destinations, legal_moves};
use crate::rules::movegen::{destinations, Destinations, Move};

/// Captures made by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub red: u32,
    pub black: u32,
}

impl Scores {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Red => self.red,
            Color::Black => self.black,
        }
    }

    fn bump(&mut self, color: Color) {
        match color {
            Color::Red => self.red += 1,
            Color::Black => self.black += 1,
        }
    }
}

/// What a successful [`GameState::apply_move_mut`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub mv: Move,
    /// The moving man was crowned on this move.
    pub promoted: bool,
    /// The same piece must capture again; the turn did not pass.
    pub chain: bool,
    /// Set when this move ended the game.
    pub winner: Option<Color>,
}

/// The whole game: board, side to move, scores and any capture chain in progress.
///
/// `apply_move` / `apply_move_mut` are the only ways to change it once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    scores: Scores,
    pending_chain: Option<Square>,
    winner: Option<Color>,
}

impl GameState {
    /// Standard opening layout, Red to move.
    pub fn new_game() -> Self {
        Self::from_position(layout::standard(), Color::Red)
    }

    /// Start from an arbitrary board with `turn` to move.
    ///
    /// If `turn` has no move at all the state is terminal from the outset.
    pub fn from_position(board: Board, turn: Color) -> Self {
        let winner = if has_any_move(&board, turn) {
            None
        } else {
            Some(turn.other())
        };
        Self {
            board,
            turn,
            scores: Scores::default(),
            pending_chain: None,
            winner,
        }
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = scores;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// The square a capture chain must continue from, if one is in progress.
    #[inline]
    pub fn pending_chain(&self) -> Option<Square> {
        self.pending_chain
    }

    /// The winner, once the side to move has run out of moves.
    #[inline]
    pub fn is_game_over(&self) -> Option<Color> {
        self.winner
    }

    /// True iff the side to move is obliged to capture this turn.
    pub fn must_capture(&self) -> bool {
        self.winner.is_none() && has_any_capture(&self.board, self.turn)
    }

    /// Highlight query for adapters. Mandatory capture and chain restrictions are applied.
    pub fn legal_destinations(&self, from: Square) -> Destinations {
        if self.winner.is_some() {
            return Destinations::default();
        }
        legal_destinations(&self.board, self.turn, self.pending_chain, from)
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn, self.pending_chain)
    }

    /// Apply a move to a copy of this state.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(from, to)?;
        Ok(next)
    }

    /// [`apply_move`](Self::apply_move) for raw adapter coordinates.
    pub fn apply_move_at(
        &self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<GameState, MoveError> {
        let from = square_at(from)?;
        let to = square_at(to)?;
        self.apply_move(from, to)
    }

    /// Apply a move in place. On error `self` is unchanged.
    pub fn apply_move_mut(&mut self, from: Square, to: Square) -> Result<Applied, MoveError> {
        let mv = self.validate(from, to)?;
        let mover = self.turn;

        // Mutate a copy so a failure leaves `self` untouched.
        let mut board = self.board.clone();
        if let Some(captured) = mv.captured {
            board.remove(captured)?;
        }
        board.move_piece(from, to)?;

        let promoted = to.row() == mover.promotion_row() && board.promote(to)?;
        if promoted {
            log::info!("{mover} man crowned on {to}");
        }

        let chain = mv.is_capture() && has_capture_from(&board, to);

        self.board = board;
        if mv.is_capture() {
            self.scores.bump(mover);
        }
        log::debug!("{mover} played {mv}");

        if chain {
            log::trace!("{mover} must continue capturing from {to}");
            self.pending_chain = Some(to);
        } else {
            self.pending_chain = None;
            self.turn = mover.other();
            if !has_any_move(&self.board, self.turn) {
                log::info!("{} has no moves left, {mover} wins", self.turn);
                self.winner = Some(mover);
            }
        }

        Ok(Applied {
            mv,
            promoted,
            chain,
            winner: self.winner,
        })
    }

    fn validate(&self, from: Square, to: Square) -> Result<Move, MoveError> {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }

        if let Some(required) = self.pending_chain {
            if from != required {
                return Err(MoveError::InvalidSource {
                    from,
                    reason: SourceProblem::ChainContinuation { required },
                });
            }
        }
        match self.board.get(from) {
            None => {
                return Err(MoveError::InvalidSource {
                    from,
                    reason: SourceProblem::Empty,
                })
            }
            Some(p) if p.color != self.turn => {
                return Err(MoveError::InvalidSource {
                    from,
                    reason: SourceProblem::OpponentPiece,
                })
            }
            Some(_) => {}
        }

        let is_jump = match from.delta_to(to).diagonal_len() {
            Some(1) => false,
            Some(2) => true,
            _ => return Err(MoveError::IllegalGeometry { from, to }),
        };

        if !is_jump && has_any_capture(&self.board, self.turn) {
            return Err(MoveError::MandatoryCapture { from, to });
        }

        let dests = destinations(&self.board, from);
        let captured = if is_jump {
            match dests.jumps.get(&to) {
                Some(&captured) => Some(captured),
                None => return Err(MoveError::IllegalMove { from, to }),
            }
        } else if dests.simple.contains(&to) {
            None
        } else {
            return Err(MoveError::IllegalMove { from, to });
        };

        Ok(Move { from, to, captured })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

fn square_at((row, col): (i32, i32)) -> Result<Square, MoveError> {
    Square::from_signed(row, col).map_err(|_| MoveError::OutOfRange { row, col })
}

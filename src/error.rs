use std::path::PathBuf;

use crate::board::piece::Color;
use crate::core::square::Square;

/// Errors raised by the board container itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate ({row},{col}) is outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },

    #[error("cannot parse square '{0}' (expected 'row,col')")]
    Unparsable(String),

    #[error("square {0} is occupied")]
    Occupied(Square),

    #[error("square {0} is empty")]
    EmptySource(Square),

    #[error("square {0} is a light square and can never hold a piece")]
    Unplayable(Square),
}

/// Why a move's source square was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceProblem {
    Empty,
    OpponentPiece,
    /// A capture chain is in progress and must continue from `required`.
    ChainContinuation { required: Square },
}

/// Rule violations reported by [`GameState::apply_move`](crate::game::GameState::apply_move).
///
/// All of these are recoverable: the state the move was attempted on is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({row},{col}) is outside the 8x8 board")]
    OutOfRange { row: i32, col: i32 },

    #[error("no movable piece at {from}: {reason}")]
    InvalidSource { from: Square, reason: SourceProblem },

    #[error("{from} -> {to} is neither a diagonal step nor a diagonal jump")]
    IllegalGeometry { from: Square, to: Square },

    #[error("{from} -> {to} does not capture, but a capture is available")]
    MandatoryCapture { from: Square, to: Square },

    #[error("{from} -> {to} is not a legal move")]
    IllegalMove { from: Square, to: Square },

    #[error("the game is over, {winner} won")]
    GameOver { winner: Color },

    #[error("board rejected the update: {0}")]
    Board(#[from] BoardError),
}

impl std::fmt::Display for SourceProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceProblem::Empty => write!(f, "the square is empty"),
            SourceProblem::OpponentPiece => write!(f, "the piece belongs to the opponent"),
            SourceProblem::ChainContinuation { required } => {
                write!(f, "the capture chain must continue from {required}")
            }
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

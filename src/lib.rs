//! A two-player checkers (draughts) rule engine.
//!
//! The engine owns the board, decides which moves are legal, enforces mandatory capture,
//! resolves multi-jump chains, crowns kings and advances turn and score. Input gestures and
//! drawing are left to adapters, which talk to [`game::GameState`] only.
//!
//! - [`core`]: squares and diagonal steps.
//! - [`board`]: pieces, the 8x8 board and the opening layout.
//! - [`rules`]: move generation and the mandatory-capture policy.
//! - [`game`]: the turn/score state machine.
//! - [`view`]: read-only text and JSON projections for renderers.
//! - [`config`]: TOML settings for the terminal front end.
//! - [`error`]: typed errors.

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;
pub mod view;

pub use crate::board::piece::{Color, Piece};
pub use crate::board::Board;
pub use crate::core::square::Square;
pub use crate::error::{BoardError, MoveError};
pub use crate::game::{Applied, GameState, Scores};
pub use crate::rules::movegen::{Destinations, Move};

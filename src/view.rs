//! Read-only projections of a [`GameState`] for renderers.
//!
//! Nothing here mutates the game; adapters redraw from these after every accepted move.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use serde::Serialize;

use crate::board::piece::{Color, Piece};
use crate::config::{AppConfig, Glyphs};
use crate::core::square::{Square, BOARD_SIZE};
use crate::game::{GameState, Scores};
use crate::rules::captures::capturing_squares;

/// A serialisable picture of the game, e.g. for a web or GUI front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub turn: Color,
    pub turn_label: &'static str,
    pub scores: Scores,
    pub pending_chain: Option<Square>,
    pub must_capture: bool,
    pub winner: Option<Color>,
    pub pieces: Vec<PlacedPiece>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedPiece {
    pub row: u8,
    pub col: u8,
    pub color: Color,
    pub king: bool,
}

impl Snapshot {
    pub fn of(state: &GameState) -> Self {
        let pieces = state
            .board()
            .pieces()
            .map(|(sq, p)| PlacedPiece {
                row: sq.row(),
                col: sq.col(),
                color: p.color,
                king: p.is_king,
            })
            .collect();
        Snapshot {
            turn: state.turn(),
            turn_label: state.turn().player_label(),
            scores: state.scores(),
            pending_chain: state.pending_chain(),
            must_capture: state.must_capture(),
            winner: state.is_game_over(),
            pieces,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// `Current Turn: Player 1 (Red)`
pub fn turn_line(state: &GameState) -> String {
    format!("Current Turn: {}", state.turn().player_label())
}

/// `Red: 2  Black: 1`
pub fn score_line(scores: Scores) -> String {
    format!("Red: {}  Black: {}", scores.red, scores.black)
}

/// Draw the board as text, marking the legal targets of `selected` when highlighting is on.
pub fn render_text(state: &GameState, selected: Option<Square>, config: &AppConfig) -> String {
    let glyphs = &config.glyphs;
    let marks: BTreeSet<Square> = match selected {
        Some(sq) if config.display.highlight => state.legal_destinations(sq).targets(),
        _ => BTreeSet::new(),
    };

    let mut out = String::new();
    if config.display.coordinates {
        out.push_str("  ");
        for col in 0..BOARD_SIZE {
            let _ = write!(out, " {col}");
        }
        out.push('\n');
    }

    for row in 0..BOARD_SIZE {
        if config.display.coordinates {
            let _ = write!(out, "{row} ");
        }
        for col in 0..BOARD_SIZE {
            let Ok(sq) = Square::new(row, col) else {
                continue;
            };
            let c = if marks.contains(&sq) {
                glyphs.highlight
            } else {
                cell_glyph(glyphs, sq, state.board().get(sq))
            };
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }

    out.push_str(&turn_line(state));
    out.push('\n');
    out.push_str(&score_line(state.scores()));
    out.push('\n');
    if let Some(winner) = state.is_game_over() {
        let _ = writeln!(out, "Game over: {winner} wins");
    } else if let Some(sq) = state.pending_chain() {
        let _ = writeln!(out, "Capture chain: continue jumping from {sq}");
    } else if state.must_capture() {
        let from: Vec<String> = capturing_squares(state.board(), state.turn())
            .iter()
            .map(Square::to_string)
            .collect();
        let _ = writeln!(out, "Capture available: jump with {}", from.join(" or "));
    }
    out
}

fn cell_glyph(glyphs: &Glyphs, sq: Square, piece: Option<Piece>) -> char {
    match piece {
        Some(Piece {
            color: Color::Red,
            is_king: false,
        }) => glyphs.red_man,
        Some(Piece {
            color: Color::Red,
            is_king: true,
        }) => glyphs.red_king,
        Some(Piece {
            color: Color::Black,
            is_king: false,
        }) => glyphs.black_man,
        Some(Piece {
            color: Color::Black,
            is_king: true,
        }) => glyphs.black_king,
        None if sq.is_playable() => glyphs.dark_empty,
        None => glyphs.light_empty,
    }
}

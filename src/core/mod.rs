//! Board geometry primitives.
//!
//! - [`coord`]: signed row/column steps and the four diagonals.
//! - [`square`]: a validated square of the 8x8 board, with its playable (dark) parity.

pub mod coord;
pub mod square;

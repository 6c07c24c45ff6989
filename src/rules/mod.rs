//! Checkers rules: move generation, the mandatory-capture policy, and the legality filter
//! that combines them.

pub mod captures;
pub mod legal;
pub mod movegen;

//! Minimum-move solver for the n-by-n sliding-tile puzzle.
//!
//! Solvability is decided operationally rather than by a parity pre-check:
//! the solver races the real board against a twin with two tiles swapped.
//! Exactly one of the pair can reach the goal, and whichever search finishes
//! first settles the question.

pub mod board;
pub mod parse;
pub mod search;
pub mod solver;

pub use board::{Board, BoardError, Move};
pub use parse::{parse_board, ParseError};
pub use solver::Solver;

//! Error taxonomy shared by the parser and the solver.
//!
//! `ParseError` covers malformed `.bff` input; `SolveError` covers the
//! internal-invariant violations described as the `Internal` class — these
//! are programming defects, not recoverable conditions, and callers are
//! expected to treat them as such (see `Solver::solve`).

use thiserror::Error;

/// Failure while reading or parsing a `.bff` puzzle file.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("line {line}: unknown grid character '{ch}'")]
    UnknownGridChar { line: usize, ch: char },

    #[error("line {line}: grid rows have inconsistent width ({expected} vs {found})")]
    RaggedGrid {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("GRID START was never closed with GRID STOP")]
    UnterminatedGrid,

    #[error("`.bff` file contains no grid block")]
    MissingGrid,

    #[error("line {line}: expected `{letter} <count>`, got {text:?}")]
    BadBudgetLine {
        line: usize,
        letter: char,
        text: String,
    },

    #[error("line {line}: expected `L x y vx vy`, got {text:?}")]
    BadLaserLine { line: usize, text: String },

    #[error("line {line}: expected `P x y`, got {text:?}")]
    BadPointLine { line: usize, text: String },

    #[error("line {line}: expected an integer, found {text:?}")]
    BadInteger { line: usize, text: String },

    #[error("I/O error reading `.bff` file: {0}")]
    Io(String),
}

/// An internal-invariant violation detected during simulation.
///
/// These are never produced
/// by correct input — they indicate a defect in the simulator itself — so
/// the public API surfaces them as a panic with diagnostic context rather
/// than propagating a `Result` all the way to callers.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SolveError {
    #[error(
        "laser at ({x}, {y}) was absorbed but retained non-zero velocity ({vx}, {vy})"
    )]
    AbsorbedWithVelocity { x: i32, y: i32, vx: i32, vy: i32 },

    #[error(
        "parity invariant violated at ({x}, {y}): both the x-neighbour and the \
         y-neighbour are interactive blocks"
    )]
    ParityViolation { x: i32, y: i32 },

    #[error("attempted to overwrite a fixed or non-empty cell at ({x}, {y})")]
    NotEmpty { x: i32, y: i32 },

    #[error("coordinates ({x}, {y}) fall outside the lattice")]
    OutOfBounds { x: i32, y: i32 },
}

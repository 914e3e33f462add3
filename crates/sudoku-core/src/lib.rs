//! Core Sudoku engine: grid model and brute-force backtracking solver.
//!
//! Boards are generalized to N² × N² with N × N boxes: the classic 9×9 board
//! for N = 3, a 4×4 board for N = 2, 16×16 for N = 4, and so on. The solver
//! is a plain exhaustive depth-first search with row/column/box feasibility
//! checks and no further pruning; "no solution" is a normal return value,
//! never an error.

mod error;
mod grid;
mod solver;

pub use error::GridError;
pub use grid::{Grid, Position};
pub use solver::Solver;

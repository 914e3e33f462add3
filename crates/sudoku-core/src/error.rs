use thiserror::Error;

/// Errors produced when constructing a [`Grid`](crate::Grid) from caller
/// input. These cover shape and digit-range problems only; a puzzle with no
/// valid completion is not an error, and
/// [`Solver::solve`](crate::Solver::solve) reports that case as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row count, row length, or total cell count does not match the board size.
    #[error("wrong dimensions: expected {expected}, found {found}")]
    WrongDimensions { expected: usize, found: usize },

    /// A cell value outside `1..=size`.
    #[error("digit {digit} out of range for a board of size {size}")]
    DigitOutOfRange { digit: u8, size: usize },

    /// A token in puzzle input that is neither a digit nor an empty marker.
    #[error("invalid token {token:?} in puzzle input")]
    InvalidToken { token: String },
}

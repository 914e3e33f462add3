//! The board model: positions and the generalized N²×N² grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GridError;

/// A (row, column) coordinate on the grid, zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// An N²×N² Sudoku board with N×N boxes.
///
/// Cells hold `Some(digit)` with `digit` in `1..=size`, or `None` for an
/// unfilled cell. The side length is always the square of the box size, so
/// only `box_size` is stored and `size` is derived. Digits are `u8`, which
/// bounds the box size at 15 (a 225×225 board); every realistic board is
/// far below that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    box_size: usize,
    /// Row-major, length `size * size`.
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Create a fully empty board.
    pub fn empty(box_size: usize) -> Self {
        debug_assert!((1..=15).contains(&box_size), "box size must be in 1..=15");
        let size = box_size * box_size;
        Self {
            box_size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from an ordered sequence of rows, each an ordered
    /// sequence of cells (`None` for empty). Rejects wrong row counts, wrong
    /// row lengths, and digits outside `1..=size`. Pre-existing duplicate
    /// digits are deliberately not rejected.
    pub fn from_rows(box_size: usize, rows: &[Vec<Option<u8>>]) -> Result<Self, GridError> {
        let size = box_size * box_size;
        if rows.len() != size {
            return Err(GridError::WrongDimensions {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(GridError::WrongDimensions {
                    expected: size,
                    found: row.len(),
                });
            }
            for &value in row {
                if let Some(digit) = value {
                    if digit == 0 || digit as usize > size {
                        return Err(GridError::DigitOutOfRange { digit, size });
                    }
                }
                cells.push(value);
            }
        }

        Ok(Self { box_size, cells })
    }

    /// Parse the compact notation used in puzzle collections: one character
    /// per cell (`'1'..='9'`, with `'0'` or `'.'` for empty), row-major.
    ///
    /// Boards larger than 9×9 cannot express every digit in one character;
    /// for those, whitespace-separated tokens are accepted instead (`"12"`,
    /// `"."`, `"0"`, ...). Any input containing whitespace is parsed in
    /// token form regardless of board size.
    pub fn from_string(box_size: usize, input: &str) -> Result<Self, GridError> {
        let size = box_size * box_size;
        let cell_count = size * size;
        let trimmed = input.trim();

        let mut cells = Vec::with_capacity(cell_count);
        if trimmed.contains(char::is_whitespace) {
            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            if tokens.len() != cell_count {
                return Err(GridError::WrongDimensions {
                    expected: cell_count,
                    found: tokens.len(),
                });
            }
            for token in tokens {
                cells.push(parse_token(token, size)?);
            }
        } else {
            if trimmed.chars().count() != cell_count {
                return Err(GridError::WrongDimensions {
                    expected: cell_count,
                    found: trimmed.chars().count(),
                });
            }
            for ch in trimmed.chars() {
                cells.push(parse_token(ch.encode_utf8(&mut [0; 4]), size)?);
            }
        }

        Ok(Self { box_size, cells })
    }

    /// Crate-internal constructor from an already-validated cell buffer.
    pub(crate) fn from_cells(box_size: usize, cells: Vec<Option<u8>>) -> Self {
        debug_assert_eq!(cells.len(), box_size.pow(4));
        Self { box_size, cells }
    }

    /// The box side length N.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// The row/column/box length N².
    pub fn size(&self) -> usize {
        self.box_size * self.box_size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size() + pos.col
    }

    /// Get the value at a position (`None` if the cell is empty).
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[self.index(pos)]
    }

    /// Set or clear the value at a position. Digit-range discipline is the
    /// caller's responsibility here, matching the permissive `solve` input
    /// contract; use [`Grid::from_rows`] for a validating boundary.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(
            value.map_or(true, |d| d >= 1 && d as usize <= self.size()),
            "digit out of range"
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Whether every cell holds a value.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Positions of all empty cells, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let size = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::new(i / size, i % size))
            .collect()
    }

    /// Iterate over the rows of the grid as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u8>]> {
        self.cells.chunks(self.size())
    }

    pub(crate) fn cells(&self) -> &[Option<u8>] {
        &self.cells
    }

    /// Render the grid in the compact notation accepted by
    /// [`Grid::from_string`]: one character per cell for boards up to 9×9,
    /// whitespace-separated tokens beyond that.
    pub fn to_string_compact(&self) -> String {
        if self.size() <= 9 {
            self.cells
                .iter()
                .map(|cell| match cell {
                    Some(digit) => char::from(b'0' + digit),
                    None => '.',
                })
                .collect()
        } else {
            self.cells
                .iter()
                .map(|cell| match cell {
                    Some(digit) => digit.to_string(),
                    None => ".".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}

fn parse_token(token: &str, size: usize) -> Result<Option<u8>, GridError> {
    if token == "." || token == "0" {
        return Ok(None);
    }
    let digit: u8 = token.parse().map_err(|_| GridError::InvalidToken {
        token: token.to_string(),
    })?;
    if digit == 0 || digit as usize > size {
        return Err(GridError::DigitOutOfRange { digit, size });
    }
    Ok(Some(digit))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let width = size.to_string().len();

        for row in 0..size {
            if row > 0 && row % self.box_size == 0 {
                for col in 0..size {
                    if col > 0 {
                        if col % self.box_size == 0 {
                            write!(f, "-+-")?;
                        } else {
                            write!(f, "-")?;
                        }
                    }
                    write!(f, "{}", "-".repeat(width))?;
                }
                writeln!(f)?;
            }
            for col in 0..size {
                if col > 0 {
                    if col % self.box_size == 0 {
                        write!(f, " | ")?;
                    } else {
                        write!(f, " ")?;
                    }
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit:>width$}")?,
                    None => write!(f, "{:>width$}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_classic() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(3, puzzle).unwrap();

        assert_eq!(grid.box_size(), 3);
        assert_eq!(grid.size(), 9);
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 1)), Some(3));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(9));
        assert_eq!(grid.empty_count(), 51);
    }

    #[test]
    fn test_from_string_dots_and_zeros_equivalent() {
        let zeros = "1002004100340020";
        let dots = "1..2..41..34..2.";
        assert_eq!(
            Grid::from_string(2, zeros).unwrap(),
            Grid::from_string(2, dots).unwrap()
        );
    }

    #[test]
    fn test_from_string_token_form() {
        let mut tokens = vec!["."; 256];
        tokens[0] = "16";
        tokens[255] = "1";
        let grid = Grid::from_string(4, &tokens.join(" ")).unwrap();

        assert_eq!(grid.size(), 16);
        assert_eq!(grid.get(Position::new(0, 0)), Some(16));
        assert_eq!(grid.get(Position::new(15, 15)), Some(1));
        assert_eq!(grid.empty_count(), 254);
    }

    #[test]
    fn test_from_string_wrong_length() {
        let result = Grid::from_string(3, "530070000");
        assert_eq!(
            result,
            Err(GridError::WrongDimensions {
                expected: 81,
                found: 9
            })
        );
    }

    #[test]
    fn test_from_string_digit_out_of_range() {
        // '5' is not a valid digit on a 4×4 board
        let result = Grid::from_string(2, "1002004100350020");
        assert_eq!(result, Err(GridError::DigitOutOfRange { digit: 5, size: 4 }));
    }

    #[test]
    fn test_from_string_invalid_token() {
        let result = Grid::from_string(2, "100200410034002x");
        assert_eq!(
            result,
            Err(GridError::InvalidToken {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![Some(1), None, None, Some(4)],
            vec![None, Some(4), Some(1), None],
            vec![None, Some(1), Some(4), None],
            vec![Some(4), None, None, Some(1)],
        ];
        let grid = Grid::from_rows(2, &rows).unwrap();

        assert_eq!(grid.get(Position::new(0, 0)), Some(1));
        assert_eq!(grid.get(Position::new(1, 2)), Some(1));
        assert_eq!(grid.empty_count(), 8);

        let collected: Vec<Vec<Option<u8>>> = grid.rows().map(<[_]>::to_vec).collect();
        assert_eq!(collected, rows);
    }

    #[test]
    fn test_from_rows_wrong_row_count() {
        let rows = vec![vec![None; 4]; 3];
        assert_eq!(
            Grid::from_rows(2, &rows),
            Err(GridError::WrongDimensions {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_from_rows_ragged_row() {
        let mut rows = vec![vec![None; 4]; 4];
        rows[2] = vec![None; 5];
        assert_eq!(
            Grid::from_rows(2, &rows),
            Err(GridError::WrongDimensions {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn test_from_rows_rejects_out_of_range_digit() {
        let mut rows = vec![vec![None; 4]; 4];
        rows[0][0] = Some(9);
        assert_eq!(
            Grid::from_rows(2, &rows),
            Err(GridError::DigitOutOfRange { digit: 9, size: 4 })
        );
    }

    #[test]
    fn test_compact_round_trip() {
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid = Grid::from_string(3, puzzle).unwrap();
        let compact = grid.to_string_compact();
        assert_eq!(Grid::from_string(3, &compact).unwrap(), grid);
        // Givens survive verbatim; empties render as '.'
        assert!(compact.starts_with("53..7"));
    }

    #[test]
    fn test_compact_round_trip_large_board() {
        let mut grid = Grid::empty(4);
        grid.set(Position::new(0, 0), Some(16));
        grid.set(Position::new(3, 7), Some(10));
        let compact = grid.to_string_compact();
        assert_eq!(Grid::from_string(4, &compact).unwrap(), grid);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::empty(3);
        assert!(!grid.is_complete());
        assert_eq!(grid.empty_count(), 81);
        assert_eq!(grid.empty_positions().len(), 81);
        assert_eq!(grid.empty_positions()[0], Position::new(0, 0));
        assert_eq!(grid.empty_positions()[80], Position::new(8, 8));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty(2);
        let pos = Position::new(1, 3);
        grid.set(pos, Some(4));
        assert_eq!(grid.get(pos), Some(4));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_display_small_board() {
        let grid = Grid::from_string(2, "1..4.41..14.4..1").unwrap();
        let expected = "\
1 . | . 4
. 4 | 1 .
----+----
. 1 | 4 .
4 . | . 1
";
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = Grid::from_string(2, "1..4.41..14.4..1").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_serde_cells_as_number_or_null() {
        let grid = Grid::from_string(2, "1..4.41..14.4..1").unwrap();
        let value = serde_json::to_value(&grid).unwrap();
        assert_eq!(value["cells"][0], serde_json::json!(1));
        assert_eq!(value["cells"][1], serde_json::json!(null));
    }
}

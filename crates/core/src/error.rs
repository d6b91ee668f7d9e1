//! Grid error type.

use std::fmt;

/// Precondition violations reported by [`crate::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row and one column.
    ZeroSize,
    /// `size * size` cells do not fit in `usize`.
    TooLarge { size: usize },
    /// Coordinate outside `[0, size)` on either axis.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Initial rows passed to `Grid::from_rows` do not form a square.
    NotSquare { row: usize, len: usize, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => f.write_str("grid size must be at least 1"),
            GridError::TooLarge { size } => {
                write!(f, "a {}x{} grid has more cells than fit in memory", size, size)
            }
            GridError::OutOfBounds { row, col, size } => write!(
                f,
                "cell ({}, {}) is outside a {}x{} grid",
                row, col, size, size
            ),
            GridError::NotSquare { row, len, size } => write!(
                f,
                "row {} has {} cells, expected {} for a square grid",
                row, len, size
            ),
        }
    }
}

impl std::error::Error for GridError {}

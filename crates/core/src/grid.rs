//! Grid module - the square map of typed cells
//!
//! The grid is `size x size` and never changes shape after construction.
//! Cells live in a flat vector in row-major order (`row * size + col`).
//! Coordinates are `(row, col)`, both 0-based; every access is bounds-checked
//! and out-of-range coordinates are reported, never clamped or wrapped.

use crate::error::GridError;
use crate::types::CellType;

/// A square grid of cell tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a `size x size` grid with every cell set to `Floor`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        let len = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![CellType::default(); len],
        })
    }

    /// Create a grid from initial rows.
    ///
    /// There must be at least one row and every row must be as long as the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<CellType>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(cell_count(size)?);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row_count(&self) -> usize {
        self.size
    }

    /// Always equal to [`Grid::row_count`]; kept separate so callers do not
    /// bake in the square shape.
    pub fn col_count(&self) -> usize {
        self.size
    }

    /// Get the tag at `(row, col)`
    pub fn cell(&self, row: usize, col: usize) -> Result<CellType, GridError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Overwrite the tag at `(row, col)`. No other cell is touched.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: CellType) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Iterate `(row, col, tag)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellType)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx / size, idx % size, *cell))
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }
}

/// Number of cells in a `size x size` grid.
fn cell_count(size: usize) -> Result<usize, GridError> {
    if size == 0 {
        return Err(GridError::ZeroSize);
    }
    size.checked_mul(size).ok_or(GridError::TooLarge { size })
}

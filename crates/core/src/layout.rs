//! GridLayout - per-cell transforms for the current viewport
//!
//! Every cell is drawn with the same unit quad spanning `[-1, 1]` on both
//! axes. Cell `(row, col)` is translated so neighbouring quads sit 2 logical
//! units apart and the grid is centered on the origin, then the whole grid is
//! shrunk by `1 / rows` so it occupies the footprint of a single unit quad:
//!
//! ```text
//! transform = projection * scale(1 / rows) * translate(x, y, 0)
//! x = (col - (cols - 1) / 2) * 2
//! y = (row - (rows - 1) / 2) * 2
//! ```
//!
//! Nothing is cached between frames: transforms are rebuilt from the grid
//! dimensions and the current projection on every call.

use glam::{Mat4, Vec3};

use crate::grid::Grid;
use crate::projection::Projection;
use crate::types::{CellType, Viewport};

/// Model-space placement of one cell before projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPlacement {
    pub translate: Vec3,
    pub scale: f32,
}

impl CellPlacement {
    /// Placement of `(row, col)` in a `rows x cols` grid.
    pub fn for_cell(rows: usize, cols: usize, row: usize, col: usize) -> Self {
        let x = (col as f32 - (cols as f32 - 1.0) / 2.0) * 2.0;
        let y = (row as f32 - (rows as f32 - 1.0) / 2.0) * 2.0;
        Self {
            translate: Vec3::new(x, y, 0.0),
            scale: 1.0 / rows as f32,
        }
    }

    /// `scale * translate`, applied right to left.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale)) * Mat4::from_translation(self.translate)
    }
}

/// One entry of a frame: which cell, its tag and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellTransform {
    pub row: usize,
    pub col: usize,
    pub cell: CellType,
    pub placement: CellPlacement,
    /// `projection * scale * translate`
    pub transform: Mat4,
}

/// Tracks the current viewport and turns a grid into per-cell transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    viewport: Viewport,
    projection: Projection,
}

impl GridLayout {
    /// # Panics
    ///
    /// Panics if `viewport.height == 0`, like [`Projection::from_viewport`].
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            projection: Projection::from_viewport(viewport),
        }
    }

    /// Replace the projection after a window resize.
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.projection = Projection::from_viewport(viewport);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// One transform per cell, rows outer and columns inner.
    pub fn transforms_for_current_grid(&self, grid: &Grid) -> Vec<CellTransform> {
        let mut out = Vec::with_capacity(grid.cells().len());
        self.write_transforms(grid, &mut out);
        out
    }

    /// Same as [`GridLayout::transforms_for_current_grid`] but reuses `out`.
    pub fn write_transforms(&self, grid: &Grid, out: &mut Vec<CellTransform>) {
        out.clear();

        let rows = grid.row_count();
        let cols = grid.col_count();
        let projection = self.projection.matrix();

        for (row, col, cell) in grid.iter() {
            let placement = CellPlacement::for_cell(rows, cols, row, col);
            out.push(CellTransform {
                row,
                col,
                cell,
                placement,
                transform: projection * placement.model_matrix(),
            });
        }
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

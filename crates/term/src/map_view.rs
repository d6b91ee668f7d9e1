//! MapView: draws a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each cell is one unit quad drawn through
//! its per-cell transform from [`GridLayout`], so the terminal behaves like a
//! tiny GL viewport whose pixels are character cells.

use crate::core::{Grid, GridLayout};
use crate::fb::{Area, CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BACKGROUND};
use crate::raster;
use crate::types::{CellType, Viewport, DEFAULT_CELL_ASPECT};

/// Terminal dimensions in character cells, plus the pixel size of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub cols: u16,
    pub rows: u16,
    pub cell_px_w: f32,
    pub cell_px_h: f32,
}

impl Surface {
    /// Surface whose glyphs are `cell_aspect` times taller than wide.
    pub fn from_cells(cols: u16, rows: u16, cell_aspect: f32) -> Self {
        Self {
            cols,
            rows,
            cell_px_w: 1.0,
            cell_px_h: cell_aspect,
        }
    }

    /// Surface from a terminal that may report its pixel size.
    ///
    /// Zero pixel sizes (unsupported by the terminal) fall back to
    /// [`Surface::from_cells`].
    pub fn from_window_size(cols: u16, rows: u16, px_w: u16, px_h: u16, cell_aspect: f32) -> Self {
        if cols == 0 || rows == 0 || px_w == 0 || px_h == 0 {
            return Self::from_cells(cols, rows, cell_aspect);
        }
        Self {
            cols,
            rows,
            cell_px_w: px_w as f32 / cols as f32,
            cell_px_h: px_h as f32 / rows as f32,
        }
    }

    /// Pixel viewport covered by `area`, normalized so neither side is zero.
    pub fn viewport(&self, area: Area) -> Viewport {
        Viewport::from_window(
            (area.width as f32 * self.cell_px_w).round() as u32,
            (area.height as f32 * self.cell_px_h).round() as u32,
        )
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::from_cells(80, 24, DEFAULT_CELL_ASPECT)
    }
}

/// Draws the map, with an optional status line on the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapView {
    show_status: bool,
}

impl Default for MapView {
    fn default() -> Self {
        Self { show_status: true }
    }
}

impl MapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, show_status: bool) -> Self {
        self.show_status = show_status;
        self
    }

    /// Part of the surface the map is drawn into.
    pub fn map_area(&self, surface: &Surface) -> Area {
        if self.show_status && surface.rows > 2 {
            Area::new(0, 0, surface.cols, surface.rows - 1)
        } else {
            Area::new(0, 0, surface.cols, surface.rows)
        }
    }

    /// Viewport to feed into [`GridLayout::on_resize`] for `surface`.
    pub fn viewport(&self, surface: &Surface) -> Viewport {
        surface.viewport(self.map_area(surface))
    }

    /// Render into a new framebuffer.
    pub fn render(&self, grid: &Grid, layout: &GridLayout, surface: &Surface) -> FrameBuffer {
        let mut fb = FrameBuffer::new(surface.cols, surface.rows);
        self.render_into(grid, layout, surface, &mut fb);
        fb
    }

    /// Render into `fb`, resizing it to the surface.
    pub fn render_into(
        &self,
        grid: &Grid,
        layout: &GridLayout,
        surface: &Surface,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(surface.cols, surface.rows);
        fb.clear(CellStyle::plain(BACKGROUND, BACKGROUND).cell(' '));

        let area = self.map_area(surface);
        for entry in layout.transforms_for_current_grid(grid) {
            let (ch, style) = palette::cell_style(entry.cell);
            raster::draw_quad(fb, area, entry.transform, style.cell(ch));
        }

        if area.height < surface.rows {
            self.draw_status_line(fb, grid, layout, surface.rows - 1);
        }
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, grid: &Grid, layout: &GridLayout, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        fb.fill(Area::new(0, y, fb.width(), 1), style.cell(' '));

        let vp = layout.viewport();
        let status = format!(
            " {}x{} grid  {}x{} px  q quit ",
            grid.row_count(),
            grid.col_count(),
            vp.width,
            vp.height
        );
        fb.put_str(0, y, &status, CellStyle { bold: true, ..style });

        // Legend, as far as it fits.
        let mut x = status.chars().count() as u16;
        for cell in CellType::BUILTIN {
            let (ch, cell_style) = palette::cell_style(cell);
            let label = cell.as_str();
            let needed = label.len() as u16 + 3;
            if x.saturating_add(needed) > fb.width() {
                break;
            }
            fb.set(x, y, cell_style.cell(ch));
            fb.put_str(x + 1, y, label, CellStyle { dim: true, ..style });
            x += needed;
        }
    }
}

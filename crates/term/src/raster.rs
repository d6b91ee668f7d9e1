//! Quad rasterizer: draws the unit quad through a 4x4 transform.
//!
//! NDC `[-1, 1]` maps onto the target area with y pointing up, like a GL
//! viewport. A character cell is covered when its center lies inside the
//! transformed quad. Layout transforms are axis-aligned, so the quad is
//! reduced to its bounding box.

use std::ops::Range;

use glam::{Mat4, Vec2, Vec3};

use crate::fb::{Area, Cell, FrameBuffer};

/// Corners of the shared unit quad in local space.
pub const UNIT_QUAD: [Vec3; 4] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
];

/// Map a point in normalized device coordinates to fractional cell
/// coordinates inside `area`.
pub fn ndc_to_area(area: Area, ndc: Vec3) -> Vec2 {
    Vec2::new(
        area.x as f32 + (ndc.x + 1.0) * 0.5 * area.width as f32,
        area.y as f32 + (1.0 - ndc.y) * 0.5 * area.height as f32,
    )
}

/// Bounding box `(min, max)` of the transformed unit quad inside `area`.
pub fn quad_bounds(area: Area, transform: Mat4) -> (Vec2, Vec2) {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for corner in UNIT_QUAD {
        let p = ndc_to_area(area, transform.project_point3(corner));
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

/// Cells whose centers fall in `[lo, hi)`, clipped to `start..start + len`.
fn covered(lo: f32, hi: f32, start: u16, len: u16) -> Range<u16> {
    let end = start.saturating_add(len);
    let a = (lo - 0.5).ceil().max(start as f32);
    let b = (hi - 0.5).ceil().min(end as f32);
    if a.is_nan() || b.is_nan() || a >= b {
        return start..start;
    }
    a as u16..b as u16
}

/// Fill every cell of `area` covered by the unit quad under `transform`.
///
/// Returns the number of cells written.
pub fn draw_quad(fb: &mut FrameBuffer, area: Area, transform: Mat4, cell: Cell) -> usize {
    if area.is_empty() {
        return 0;
    }

    let (min, max) = quad_bounds(area, transform);
    let xs = covered(min.x, max.x, area.x, area.width);
    let ys = covered(min.y, max.y, area.y, area.height);

    let mut written = 0;
    for y in ys {
        for x in xs.clone() {
            fb.set(x, y, cell);
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::CellStyle;

    #[test]
    fn identity_covers_whole_area() {
        let mut fb = FrameBuffer::new(10, 10);
        let area = fb.area();
        let n = draw_quad(&mut fb, area, Mat4::IDENTITY, CellStyle::default().cell('#'));
        assert_eq!(n, 100);
        assert!(fb.cells().iter().all(|c| c.ch == '#'));
    }

    #[test]
    fn half_scale_covers_center() {
        let mut fb = FrameBuffer::new(8, 4);
        let area = fb.area();
        let m = Mat4::from_scale(Vec3::splat(0.5));
        let n = draw_quad(&mut fb, area, m, CellStyle::default().cell('#'));
        assert_eq!(n, 4 * 2);
        assert_eq!(fb.row_text(0), "        ");
        assert_eq!(fb.row_text(1), "  ####  ");
        assert_eq!(fb.row_text(2), "  ####  ");
        assert_eq!(fb.row_text(3), "        ");
    }

    #[test]
    fn positive_y_is_drawn_at_top() {
        let mut fb = FrameBuffer::new(2, 2);
        let area = fb.area();
        // Quad shrunk to the upper half of NDC.
        let m = Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(1.0, 0.5, 1.0));
        draw_quad(&mut fb, area, m, CellStyle::default().cell('#'));
        assert_eq!(fb.row_text(0), "##");
        assert_eq!(fb.row_text(1), "  ");
    }

    #[test]
    fn offscreen_quad_draws_nothing() {
        let mut fb = FrameBuffer::new(4, 4);
        let area = fb.area();
        let m = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(draw_quad(&mut fb, area, m, Cell::default()), 0);
    }

    #[test]
    fn drawing_respects_area_offset() {
        let mut fb = FrameBuffer::new(4, 3);
        let area = Area::new(0, 1, 4, 2);
        draw_quad(&mut fb, area, Mat4::IDENTITY, CellStyle::default().cell('#'));
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "####");
        assert_eq!(fb.row_text(2), "####");
    }
}

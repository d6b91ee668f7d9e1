//! Orthographic aspect-fit projection.
//!
//! Maps a logical box centered on the origin to normalized device
//! coordinates. The box always contains `[-1, 1]` on both axes; the wider
//! window axis gets extra logical range instead of cropping the narrower one,
//! so square content stays square.

use glam::Mat4;

use crate::types::Viewport;

const NEAR: f32 = -1.0;
const FAR: f32 = 1.0;

/// Projection derived from a viewport. Holds no state beyond its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    half_width: f32,
    half_height: f32,
    matrix: Mat4,
}

impl Projection {
    /// Compute the projection for `viewport`.
    ///
    /// # Panics
    ///
    /// Panics if `viewport.height == 0`. Window sizes must be normalized
    /// (see [`Viewport::from_window`]) before they get here.
    pub fn from_viewport(viewport: Viewport) -> Self {
        assert!(viewport.height > 0, "viewport height must be positive");

        let ratio = viewport.aspect_ratio();
        let (half_width, half_height) = if ratio > 1.0 {
            (ratio, 1.0)
        } else {
            (1.0, 1.0 / ratio)
        };

        let matrix = Mat4::orthographic_rh_gl(
            -half_width,
            half_width,
            -half_height,
            half_height,
            NEAR,
            FAR,
        );

        Self {
            half_width,
            half_height,
            matrix,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn left(&self) -> f32 {
        -self.half_width
    }

    pub fn right(&self) -> f32 {
        self.half_width
    }

    pub fn bottom(&self) -> f32 {
        -self.half_height
    }

    pub fn top(&self) -> f32 {
        self.half_height
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_viewport(Viewport::default())
    }
}

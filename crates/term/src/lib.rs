//! Terminal map renderer.
//!
//! Plays the part of a GPU driver for the core layout: every grid cell is a
//! unit quad pushed through its 4x4 transform and rasterized into a
//! framebuffer of character cells, which is then flushed to the terminal.
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Treat the terminal like a viewport, with resize as the only input that
//!   changes the projection
//! - Account for non-square glyphs through the pixel size of a cell

pub mod fb;
pub mod map_view;
pub mod palette;
pub mod raster;
pub mod render_throttle;
pub mod renderer;

pub use tile_grid_core as core;
pub use tile_grid_types as types;

pub use fb::{Area, Cell, CellStyle, FrameBuffer, Rgb};
pub use map_view::{MapView, Surface};
pub use raster::draw_quad;
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{current_surface, TerminalRenderer};

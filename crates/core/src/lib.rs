//! Core module - grid model, projection and per-cell layout
//!
//! This crate holds the only non-trivial logic of the application and has
//! **no dependencies** on terminals, input or I/O:
//!
//! - **Deterministic**: projection and layout are pure functions of their inputs
//! - **Testable**: every property is checked with plain unit tests
//! - **Portable**: any backend that can draw a quad with a 4x4 transform can
//!   consume the output (terminal, GPU, headless dump)
//!
//! # Module Structure
//!
//! - [`grid`]: square map of [`CellType`](types::CellType) values with bounds-checked access
//! - [`projection`]: aspect-fit orthographic projection for a viewport
//! - [`layout`]: per-cell `projection * scale * translate` transforms
//! - [`error`]: [`GridError`]
//!
//! # Example
//!
//! ```
//! use tile_grid_core::{Grid, GridLayout};
//! use tile_grid_types::{CellType, Viewport};
//!
//! let mut grid = Grid::new(10).unwrap();
//! grid.set_cell(0, 0, CellType::Wall).unwrap();
//!
//! let mut layout = GridLayout::new(Viewport::new(800, 600));
//! layout.on_resize(Viewport::new(600, 800));
//!
//! let frame = layout.transforms_for_current_grid(&grid);
//! assert_eq!(frame.len(), 100);
//! assert_eq!(frame[0].cell, CellType::Wall);
//! ```

pub mod error;
pub mod grid;
pub mod layout;
pub mod projection;

pub use tile_grid_types as types;

pub use error::GridError;
pub use grid::Grid;
pub use layout::{CellPlacement, CellTransform, GridLayout};
pub use projection::Projection;

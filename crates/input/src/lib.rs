//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::AppAction`]. The map is
//! passive, so the only keys of interest are quitting and forcing a repaint.

pub mod map;

pub use tile_grid_types as types;

pub use map::{handle_key_event, should_quit};

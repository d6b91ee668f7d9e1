//! Tile grid (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_grid::{core,input,term,types}` and
//! hosts the application-level pieces: configuration and the headless
//! transform dump.

pub mod config;
pub mod dump;

pub use tile_grid_core as core;
pub use tile_grid_input as input;
pub use tile_grid_term as term;
pub use tile_grid_types as types;

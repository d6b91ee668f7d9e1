//! Application configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TILE_GRID_SIZE` | 10 | Side length of the map |
//! | `TILE_GRID_CELL_ASPECT` | 2.0 | Glyph height/width when the terminal reports no pixel size |
//! | `TILE_GRID_REDRAW_MS` | 250 | Minimum interval between redraws of an unchanged frame |
//! | `TILE_GRID_PATTERN` | `demo` | Initial cell tags: `floor` or `demo` |

use anyhow::{anyhow, Result};

use crate::core::Grid;
use crate::types::{CellType, DEFAULT_CELL_ASPECT, DEFAULT_GRID_SIZE, DEFAULT_REDRAW_MS};

/// Initial contents of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Every cell is `Floor`.
    Floor,
    /// Walled border with water, rock and clay inside, so every built-in
    /// tag is visible.
    Demo,
}

impl Pattern {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "floor" => Some(Pattern::Floor),
            "demo" => Some(Pattern::Demo),
            _ => None,
        }
    }

    /// Build a `size x size` grid filled with this pattern.
    pub fn build(self, size: usize) -> Result<Grid> {
        let mut grid = Grid::new(size)?;
        if self == Pattern::Floor {
            return Ok(grid);
        }

        let center = (size as f32 - 1.0) / 2.0;
        let pond = size as f32 / 5.0;
        let last = size - 1;
        for row in 0..size {
            for col in 0..size {
                let dr = row as f32 - center;
                let dc = col as f32 - center;
                let cell = if row == 0 || col == 0 || row == last || col == last {
                    CellType::Wall
                } else if (dr * dr + dc * dc).sqrt() <= pond {
                    CellType::Water
                } else if (row * 7 + col * 3) % 11 == 0 {
                    CellType::Rock
                } else if (row + 2 * col) % 6 == 0 {
                    CellType::Clay
                } else {
                    CellType::Floor
                };
                grid.set_cell(row, col, cell)?;
            }
        }
        Ok(grid)
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid_size: usize,
    pub cell_aspect: f32,
    pub redraw_ms: u64,
    pub pattern: Pattern,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_aspect: DEFAULT_CELL_ASPECT,
            redraw_ms: DEFAULT_REDRAW_MS,
            pattern: Pattern::Demo,
        }
    }
}

impl AppConfig {
    /// Create from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. Unset or blank variables
    /// keep their defaults; set but invalid ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let mut config = Self::default();

        if let Some(v) = get("TILE_GRID_SIZE") {
            config.grid_size = v
                .parse::<usize>()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| anyhow!("TILE_GRID_SIZE must be a positive integer, got {:?}", v))?;
        }

        if let Some(v) = get("TILE_GRID_CELL_ASPECT") {
            config.cell_aspect = v
                .parse::<f32>()
                .ok()
                .filter(|a| a.is_finite() && *a > 0.0)
                .ok_or_else(|| {
                    anyhow!("TILE_GRID_CELL_ASPECT must be a positive number, got {:?}", v)
                })?;
        }

        if let Some(v) = get("TILE_GRID_REDRAW_MS") {
            config.redraw_ms = v
                .parse::<u64>()
                .map_err(|_| anyhow!("TILE_GRID_REDRAW_MS must be an integer, got {:?}", v))?;
        }

        if let Some(v) = get("TILE_GRID_PATTERN") {
            config.pattern = Pattern::from_str(&v)
                .ok_or_else(|| anyhow!("TILE_GRID_PATTERN must be floor or demo, got {:?}", v))?;
        }

        Ok(config)
    }
}

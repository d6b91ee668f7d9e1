//! Shared types module - cell tags, viewport state and defaults
//!
//! Pure data types with no external dependencies, usable from the core
//! (grid, projection, layout), the terminal driver and the application.
//!
//! # Cell tags
//!
//! Every grid cell stores a [`CellType`]. The built-in tags have fixed
//! numeric values; caller-defined tags live in an open range starting at
//! [`CUSTOM_TAG_BASE`]:
//!
//! | Tag | Value |
//! |-----|-------|
//! | `Floor` | 0 |
//! | `Clay` | 1 |
//! | `Wall` | 2 |
//! | `Rock` | 3 |
//! | `Water` | 4 |
//! | `Custom` | 1000 and above |
//!
//! Values 5..=999 are reserved and never name a cell.

use std::fmt;

/// Grid size used when nothing else is configured (10x10)
pub const DEFAULT_GRID_SIZE: usize = 10;

/// First numeric tag available to caller-defined cell types
pub const CUSTOM_TAG_BASE: u32 = 1000;

/// Event poll interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Minimum interval between redraws of an unchanged frame
pub const DEFAULT_REDRAW_MS: u64 = 250;

/// Height/width ratio of a terminal glyph, used when the terminal does not
/// report its size in pixels.
pub const DEFAULT_CELL_ASPECT: f32 = 2.0;

/// A caller-defined cell tag, always `>= CUSTOM_TAG_BASE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomTag(u32);

impl CustomTag {
    /// Wrap a numeric tag. Returns `None` for values below [`CUSTOM_TAG_BASE`].
    ///
    /// ```
    /// use tile_grid_types::CustomTag;
    ///
    /// assert!(CustomTag::new(1000).is_some());
    /// assert!(CustomTag::new(4).is_none());
    /// ```
    pub const fn new(tag: u32) -> Option<Self> {
        if tag >= CUSTOM_TAG_BASE {
            Some(Self(tag))
        } else {
            None
        }
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The typed value stored per grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    #[default]
    Floor,
    Clay,
    Wall,
    Rock,
    Water,
    Custom(CustomTag),
}

impl CellType {
    /// All built-in tags in numeric order
    pub const BUILTIN: [CellType; 5] = [
        CellType::Floor,
        CellType::Clay,
        CellType::Wall,
        CellType::Rock,
        CellType::Water,
    ];

    /// Numeric value of this tag
    pub const fn tag(self) -> u32 {
        match self {
            CellType::Floor => 0,
            CellType::Clay => 1,
            CellType::Wall => 2,
            CellType::Rock => 3,
            CellType::Water => 4,
            CellType::Custom(tag) => tag.get(),
        }
    }

    /// Parse a numeric tag. Reserved values (5..=999) yield `None`.
    ///
    /// ```
    /// use tile_grid_types::CellType;
    ///
    /// assert_eq!(CellType::from_tag(2), Some(CellType::Wall));
    /// assert_eq!(CellType::from_tag(500), None);
    /// assert_eq!(CellType::from_tag(1001).map(|c| c.tag()), Some(1001));
    /// ```
    pub const fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(CellType::Floor),
            1 => Some(CellType::Clay),
            2 => Some(CellType::Wall),
            3 => Some(CellType::Rock),
            4 => Some(CellType::Water),
            _ => match CustomTag::new(tag) {
                Some(custom) => Some(CellType::Custom(custom)),
                None => None,
            },
        }
    }

    /// Lowercase name of the tag (`"custom"` for the whole custom range)
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Floor => "floor",
            CellType::Clay => "clay",
            CellType::Wall => "wall",
            CellType::Rock => "rock",
            CellType::Water => "water",
            CellType::Custom(_) => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CellType::Custom(_))
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Custom(tag) => write!(f, "custom({})", tag.get()),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Window dimensions in pixels.
///
/// The projection requires `height > 0`. Values coming straight from a
/// window system should go through [`Viewport::from_window`], which clamps
/// degenerate sizes to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Normalize a raw window size: zero extents become 1.
    pub fn from_window(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // 4:3 desktop window.
        Self::new(800, 600)
    }
}

/// Actions the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppAction {
    Quit,
    /// Discard the previous frame and repaint everything
    Redraw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tags_roundtrip_through_numeric_value() {
        for cell in CellType::BUILTIN {
            assert_eq!(CellType::from_tag(cell.tag()), Some(cell));
        }
    }

    #[test]
    fn reserved_range_is_rejected() {
        assert_eq!(CellType::from_tag(5), None);
        assert_eq!(CellType::from_tag(CUSTOM_TAG_BASE - 1), None);
        assert!(CellType::from_tag(CUSTOM_TAG_BASE).unwrap().is_custom());
    }

    #[test]
    fn custom_tags_never_collide_with_builtins() {
        let custom = CellType::from_tag(CUSTOM_TAG_BASE).unwrap();
        assert!(CellType::BUILTIN.iter().all(|b| b.tag() != custom.tag()));
    }

    #[test]
    fn default_cell_is_floor() {
        assert_eq!(CellType::default(), CellType::Floor);
    }

    #[test]
    fn display_includes_custom_value() {
        assert_eq!(CellType::Water.to_string(), "water");
        assert_eq!(
            CellType::Custom(CustomTag::new(1234).unwrap()).to_string(),
            "custom(1234)"
        );
    }

    #[test]
    fn viewport_from_window_clamps_degenerate_sizes() {
        assert_eq!(Viewport::from_window(800, 0), Viewport::new(800, 1));
        assert_eq!(Viewport::from_window(0, 600), Viewport::new(1, 600));
        assert_eq!(Viewport::from_window(640, 480), Viewport::new(640, 480));
    }

    #[test]
    fn viewport_aspect_ratio() {
        assert!((Viewport::new(800, 600).aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}

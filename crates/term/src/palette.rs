//! Glyph and color per cell tag.

use crate::fb::{CellStyle, Rgb};
use crate::types::CellType;

/// Background behind the map and in the letterbox margins.
pub const BACKGROUND: Rgb = Rgb::new(51, 77, 77);

/// Glyph and style used to fill the quad of a `cell`.
///
/// Every custom tag shares one fallback look.
pub fn cell_style(cell: CellType) -> (char, CellStyle) {
    let (ch, fg, bg) = match cell {
        CellType::Floor => ('·', Rgb::new(120, 120, 110), Rgb::new(40, 38, 34)),
        CellType::Clay => ('▒', Rgb::new(190, 120, 70), Rgb::new(110, 60, 30)),
        CellType::Wall => ('█', Rgb::new(170, 170, 170), Rgb::new(90, 90, 90)),
        CellType::Rock => ('▓', Rgb::new(120, 120, 140), Rgb::new(60, 60, 72)),
        CellType::Water => ('≈', Rgb::new(120, 190, 255), Rgb::new(20, 60, 140)),
        CellType::Custom(_) => ('?', Rgb::new(255, 120, 230), Rgb::new(70, 20, 60)),
    };
    (ch, CellStyle::plain(fg, bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomTag;

    #[test]
    fn builtin_tags_have_distinct_glyphs() {
        let mut glyphs: Vec<char> = CellType::BUILTIN.iter().map(|c| cell_style(*c).0).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), CellType::BUILTIN.len());
    }

    #[test]
    fn custom_tags_share_fallback() {
        let a = CellType::Custom(CustomTag::new(1000).unwrap());
        let b = CellType::Custom(CustomTag::new(4242).unwrap());
        assert_eq!(cell_style(a), cell_style(b));
    }
}

//! Redraw throttling for a mostly static map.

use crate::core::Grid;
use crate::map_view::Surface;

/// Decides when a new frame is worth flushing.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Render immediately on the first call and whenever `fingerprint`
    /// changes; otherwise at most once per `min_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }

    /// Forget the last frame so the next call renders.
    pub fn reset(&mut self) {
        self.has_rendered = false;
    }
}

/// FNV-1a over everything that changes what a frame looks like.
pub fn frame_fingerprint(grid: &Grid, surface: &Surface) -> u64 {
    let mut h = Fnv64::new();
    h.write(&surface.cols.to_le_bytes());
    h.write(&surface.rows.to_le_bytes());
    h.write(&surface.cell_px_w.to_bits().to_le_bytes());
    h.write(&surface.cell_px_h.to_bits().to_le_bytes());
    h.write(&(grid.size() as u64).to_le_bytes());
    for cell in grid.cells() {
        h.write(&cell.tag().to_le_bytes());
    }
    h.finish()
}

struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

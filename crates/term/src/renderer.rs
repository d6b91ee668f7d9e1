//! TerminalRenderer: owns the terminal session and flushes framebuffers to it.
//!
//! Frames are diffed against the previous one and only changed runs are
//! written; a size change repaints every row in place. The terminal is
//! restored on [`TerminalRenderer::exit`] or, failing that, when the
//! renderer is dropped.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use log::{debug, warn};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::map_view::Surface;

/// Terminal session over `W`, stdout unless built with
/// [`TerminalRenderer::with_writer`].
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    /// Raw mode is on; cleared only once raw mode has been left.
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into `out`. The terminal mode is untouched until
    /// [`TerminalRenderer::enter`].
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        debug!("entered alternate screen");
        Ok(())
    }

    /// Restore the terminal.
    ///
    /// Raw mode is left even when writing the restore sequence fails, and the
    /// first error is returned. If leaving raw mode fails the session stays
    /// active, so a later call (or drop) tries again.
    pub fn exit(&mut self) -> Result<()> {
        self.exit_with(terminal::disable_raw_mode)
    }

    fn exit_with(&mut self, disable_raw_mode: impl FnOnce() -> io::Result<()>) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        let escapes = write_restore_sequence(&mut self.out);
        let raw = disable_raw_mode();
        if raw.is_ok() {
            self.active = false;
            debug!("restored terminal");
        }
        escapes.and(raw).map_err(anyhow::Error::from)
    }

    /// Force the next draw to repaint every cell.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it every frame; after
    /// the call it holds the previous frame and can be overwritten. Only
    /// changed runs are written unless the size changed or the renderer was
    /// invalidated, in which case every row is repainted in place.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut pen = None;
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                for_each_changed_run(&prev, fb, |x, y, len| {
                    self.paint_run(fb, x, y, len, &mut pen)
                })?;
                prev
            }
            other => {
                debug!("repainting {}x{}", fb.width(), fb.height());
                // The map view covers every cell, letterbox included.
                for y in 0..fb.height() {
                    self.paint_run(fb, 0, y, fb.width(), &mut pen)?;
                }
                let mut prev = other.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };

        if pen.is_some() {
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        self.out.flush()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn paint_run(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
        pen: &mut Option<CellStyle>,
    ) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in (x..x.saturating_add(len)).filter_map(|cx| fb.get(cx, y)) {
            self.set_pen(cell.style, pen)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    /// Emit only the parts of `style` the pen does not already have. An
    /// attribute change goes through SGR reset, which drops both colors too.
    fn set_pen(&mut self, style: CellStyle, pen: &mut Option<CellStyle>) -> Result<()> {
        let kept = match *pen {
            Some(p) if p.bold == style.bold && p.dim == style.dim => Some(p),
            _ => {
                self.out.queue(SetAttribute(Attribute::Reset))?;
                if style.bold {
                    self.out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    self.out.queue(SetAttribute(Attribute::Dim))?;
                }
                None
            }
        };
        if kept.map(|p| p.fg) != Some(style.fg) {
            self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if kept.map(|p| p.bg) != Some(style.bg) {
            self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        *pen = Some(style);
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            warn!("failed to restore terminal: {}", e);
        }
    }
}

fn write_restore_sequence(out: &mut impl Write) -> io::Result<()> {
    out.queue(ResetColor)?
        .queue(SetAttribute(Attribute::Reset))?
        .queue(terminal::EnableLineWrap)?
        .queue(cursor::Show)?
        .queue(terminal::LeaveAlternateScreen)?;
    out.flush()
}

/// Query the current terminal as a [`Surface`].
///
/// Uses the reported pixel size when the terminal provides one, otherwise
/// assumes glyphs `cell_aspect` times taller than wide.
pub fn current_surface(cell_aspect: f32) -> Result<Surface> {
    match terminal::window_size() {
        Ok(size) => Ok(Surface::from_window_size(
            size.columns,
            size.rows,
            size.width,
            size.height,
            cell_aspect,
        )),
        Err(e) => {
            debug!("pixel size unavailable ({}), using cell aspect {}", e, cell_aspect);
            let (cols, rows) = terminal::size()?;
            Ok(Surface::from_cells(cols, rows, cell_aspect))
        }
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "write failed"))
        }
    }

    fn output(term: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8_lossy(&term.out).into_owned()
    }

    #[test]
    fn exit_leaves_raw_mode_when_restore_sequence_fails() {
        let mut term = TerminalRenderer::with_writer(BrokenPipe);
        term.active = true;

        let mut raw_mode_left = false;
        let result = term.exit_with(|| {
            raw_mode_left = true;
            Ok(())
        });

        assert_eq!(result.unwrap_err().to_string(), "write failed");
        assert!(raw_mode_left);
        assert!(!term.active);
    }

    #[test]
    fn exit_stays_active_until_raw_mode_is_left() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.active = true;

        let result = term.exit_with(|| Err(io::Error::other("tcsetattr")));
        assert_eq!(result.unwrap_err().to_string(), "tcsetattr");
        assert!(term.active);
        assert!(output(&term).contains("\x1b[?1049l"));

        term.exit_with(|| Ok(())).unwrap();
        assert!(!term.active);
    }

    #[test]
    fn exit_reports_the_first_error() {
        let mut term = TerminalRenderer::with_writer(BrokenPipe);
        term.active = true;
        let result = term.exit_with(|| Err(io::Error::other("tcsetattr")));
        assert_eq!(result.unwrap_err().to_string(), "write failed");
        assert!(term.active);
        term.exit_with(|| Ok(())).unwrap_err();
        assert!(!term.active);
    }

    #[test]
    fn inactive_exit_touches_nothing() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.exit_with(|| panic!("raw mode was never entered")).unwrap();
        assert!(term.out.is_empty());
    }

    #[test]
    fn first_draw_repaints_rows_in_place() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(CellStyle::default().cell('X'));
        term.draw_swap(&mut fb).unwrap();

        let out = output(&term);
        assert_eq!(out.matches("XXX").count(), 2);
        assert!(out.contains("\x1b[1;1H"));
        assert!(out.contains("\x1b[2;1H"));
        assert!(!out.contains("\x1b[2J"), "no screen clear: {:?}", out);
    }

    #[test]
    fn unchanged_frame_writes_no_cells() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(3, 2);
        fb.clear(CellStyle::default().cell('X'));
        term.draw_swap(&mut fb).unwrap();

        term.out.clear();
        fb.clear(CellStyle::default().cell('X'));
        term.draw_swap(&mut fb).unwrap();
        assert!(term.out.is_empty(), "unexpected output: {:?}", output(&term));
    }

    #[test]
    fn pen_only_changes_what_differs() {
        let bg = Rgb::new(51, 77, 77);
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(3, 1);
        fb.set(0, 0, CellStyle::plain(Rgb::new(255, 0, 0), bg).cell('a'));
        fb.set(1, 0, CellStyle::plain(Rgb::new(0, 255, 0), bg).cell('b'));
        fb.set(2, 0, CellStyle::plain(Rgb::new(0, 255, 0), bg).cell('c'));
        term.draw_swap(&mut fb).unwrap();

        let out = output(&term);
        assert_eq!(out.matches("48;2;51;77;77").count(), 1);
        assert_eq!(out.matches("38;2;").count(), 2);
        assert!(out.contains("bc"));
    }

    #[test]
    fn rgb_maps_to_truecolor() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);

        for x in 1..=3 {
            b.set(x, 0, style.cell('X'));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_run_iterator_reports_every_row_on_resize() {
        let a = FrameBuffer::new(3, 2);
        let b = FrameBuffer::new(4, 3);

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 4), (0, 1, 4), (0, 2, 4)]);
    }

    #[test]
    fn identical_frames_produce_no_runs() {
        let a = FrameBuffer::new(3, 3);
        let mut calls = 0;
        for_each_changed_run(&a, &a.clone(), |_, _, _| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 0);
    }
}

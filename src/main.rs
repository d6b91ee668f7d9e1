//! Terminal tile map viewer (default binary).
//!
//! Draws the map through the core layout into the terminal and keeps it
//! aspect-correct across resizes. `tile-grid dump` prints the per-cell
//! transforms as JSON instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event};
use env_logger::Env;
use log::{debug, info, warn};

use tile_grid::config::AppConfig;
use tile_grid::core::{Grid, GridLayout};
use tile_grid::dump::{build_dump, parse_dump_args, write_dump};
use tile_grid::input::handle_key_event;
use tile_grid::term::{
    current_surface, frame_fingerprint, FrameBuffer, MapView, RenderThrottle, Surface,
    TerminalRenderer,
};
use tile_grid::types::{AppAction, FRAME_MS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = AppConfig::from_env()?;
    debug!("config: {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(dump) = parse_dump_args(&args)? {
        let size = dump.size.unwrap_or(config.grid_size);
        let grid = config.pattern.build(size)?;
        return write_dump(io::stdout().lock(), &build_dump(&grid, dump.viewport));
    }
    if let Some(arg) = args.first() {
        return Err(anyhow!("unknown argument: {}", arg));
    }

    let grid = config.pattern.build(config.grid_size)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &grid, &config);

    // Always try to restore terminal state; a run error takes precedence.
    let restored = term.exit();
    if let (Err(_), Err(e)) = (&result, &restored) {
        warn!("failed to restore terminal: {}", e);
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, grid: &Grid, config: &AppConfig) -> Result<()> {
    let view = MapView::default();
    let mut surface = current_surface(config.cell_aspect)?;
    let mut layout = GridLayout::new(view.viewport(&surface));
    let mut throttle = RenderThrottle::new(config.redraw_ms);
    let mut fb = FrameBuffer::new(surface.cols, surface.rows);

    info!(
        "showing {}x{} grid in {}x{} terminal",
        grid.row_count(),
        grid.col_count(),
        surface.cols,
        surface.rows
    );

    let started = Instant::now();
    loop {
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame_fingerprint(grid, &surface)) {
            view.render_into(grid, &layout, &surface, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match handle_key_event(key) {
                Some(AppAction::Quit) => return Ok(()),
                Some(AppAction::Redraw) => {
                    term.invalidate();
                    throttle.reset();
                }
                None => {}
            },
            Event::Resize(cols, rows) => {
                surface = resized_surface(cols, rows, config.cell_aspect);
                layout.on_resize(view.viewport(&surface));
                debug!(
                    "resize to {}x{} cells, viewport {:?}",
                    cols,
                    rows,
                    layout.viewport()
                );
            }
            _ => {}
        }
    }
}

/// The resize event carries the cell size; the pixel size is queried again
/// and only trusted when it agrees with the event.
fn resized_surface(cols: u16, rows: u16, cell_aspect: f32) -> Surface {
    match current_surface(cell_aspect) {
        Ok(surface) if surface.cols == cols && surface.rows == rows => surface,
        _ => Surface::from_cells(cols, rows, cell_aspect),
    }
}

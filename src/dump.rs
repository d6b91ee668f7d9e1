//! `tile-grid dump`: print the per-cell transforms for a viewport as JSON.
//!
//! Runs without a terminal session, which makes it handy for checking the
//! layout numbers a GPU backend would receive.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{Grid, GridLayout};
use crate::types::Viewport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Overrides the configured grid size
    pub size: Option<usize>,
    pub viewport: Viewport,
}

/// Parse `dump [--size N] [--width W] [--height H]`.
///
/// Returns `Ok(None)` when the first argument is not `dump`.
pub fn parse_dump_args(args: &[String]) -> Result<Option<DumpConfig>> {
    if args.is_empty() || args[0] != "dump" {
        return Ok(None);
    }

    let mut size = None;
    let mut viewport = Viewport::default();
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--size" | "--width" | "--height" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("dump: missing value for {}", flag))?;
                let n = v
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n >= 1)
                    .ok_or_else(|| anyhow!("dump: invalid {} value: {}", flag, v))?;
                match flag {
                    "--size" => size = Some(n as usize),
                    "--width" => viewport.width = n,
                    _ => viewport.height = n,
                }
            }
            other => {
                return Err(anyhow!("dump: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(DumpConfig { size, viewport }))
}

#[derive(Debug, Clone, Serialize)]
pub struct VisibleBox {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellRecord {
    pub row: usize,
    pub col: usize,
    pub tag: u32,
    pub kind: &'static str,
    pub translate: [f32; 3],
    pub scale: f32,
    /// Column-major, as uploaded to a shader uniform
    pub transform: [f32; 16],
}

#[derive(Debug, Clone, Serialize)]
pub struct Dump {
    pub rows: usize,
    pub cols: usize,
    pub width: u32,
    pub height: u32,
    pub visible: VisibleBox,
    pub cells: Vec<CellRecord>,
}

pub fn build_dump(grid: &Grid, viewport: Viewport) -> Dump {
    let layout = GridLayout::new(viewport);
    let projection = layout.projection();

    let cells = layout
        .transforms_for_current_grid(grid)
        .into_iter()
        .map(|entry| CellRecord {
            row: entry.row,
            col: entry.col,
            tag: entry.cell.tag(),
            kind: entry.cell.as_str(),
            translate: entry.placement.translate.to_array(),
            scale: entry.placement.scale,
            transform: entry.transform.to_cols_array(),
        })
        .collect();

    Dump {
        rows: grid.row_count(),
        cols: grid.col_count(),
        width: viewport.width,
        height: viewport.height,
        visible: VisibleBox {
            left: projection.left(),
            right: projection.right(),
            bottom: projection.bottom(),
            top: projection.top(),
        },
        cells,
    }
}

pub fn write_dump(mut out: impl Write, dump: &Dump) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, dump)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

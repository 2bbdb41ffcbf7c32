//! ASCII rendering of a layout

use dg_core::dungeon::{CellKind, Coord};
use dg_core::{GenerationStats, Layout};

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const DOOR: char = '+';
pub const OPEN: char = ' ';

fn glyph(kind: Option<CellKind>) -> char {
    match kind {
        Some(CellKind::Wall) => WALL,
        Some(CellKind::Room) => FLOOR,
        Some(CellKind::Door) => DOOR,
        Some(CellKind::Open) | None => OPEN,
    }
}

/// One line per grid row, top row first
pub fn render_ascii(layout: &Layout) -> String {
    let mut out = String::with_capacity((layout.width() + 1) * layout.height());
    for y in 0..layout.height() as i32 {
        for x in 0..layout.width() as i32 {
            out.push(glyph(layout.cell_kind(Coord::new(x, y))));
        }
        out.push('\n');
    }
    out
}

pub fn summary(layout: &Layout, stats: &GenerationStats, seed: u64) -> String {
    format!(
        "{}x{} seed={} rooms={} collapsed={} candidates={} doors={} ({} tree + {} extra) components={}",
        layout.width(),
        layout.height(),
        seed,
        stats.rooms,
        stats.collapsed_cells,
        stats.candidates,
        stats.doors(),
        stats.mst_doors,
        stats.extra_doors,
        layout.connected_components(),
    )
}

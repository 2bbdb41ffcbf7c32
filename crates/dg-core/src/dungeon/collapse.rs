//! Double-wall collapsing
//!
//! Rooms are walled independently, so two neighbours can end up with a
//! two-cell-thick seam between them (and a room can sit behind its own wall
//! plus the border). When the inner layer borders only one room, that layer
//! is handed to the room as floor, leaving a single-thickness wall.

use tracing::{debug, trace};

use super::coord::{Coord, Direction};
use super::layout::Layout;
use super::room::RoomId;

/// Attach `single` to room `id` if `id` is the only room around it.
///
/// The cell leaves its wall owner and becomes floor of `id`; its remaining
/// wall neighbours (except border cells) become owned by `id`.
fn try_attach(layout: &mut Layout, id: RoomId, single: Coord) -> bool {
    if layout.grid().is_border(single) || layout.surrounding_rooms(single) != [id] {
        return false;
    }

    let wall_neighbours: Vec<Coord> = single
        .neighbours()
        .filter(|n| layout.grid().is_wall(*n))
        .collect();

    if !layout.wall_to_floor(id, single) {
        return false;
    }
    for wall in wall_neighbours {
        layout.adopt_wall(id, wall);
    }
    true
}

/// One sweep over every room's edge cells
///
/// For each edge cell, the first cardinal direction whose 1-step and 2-step
/// neighbours are both walls and whose 1-step cell can be attached is
/// collapsed; the remaining directions of that cell are skipped. Edge sets
/// are read as they were at the start of the sweep. Returns the number of
/// cells attached.
pub fn collapse_pass(layout: &mut Layout) -> usize {
    let mut attached = 0;

    for index in 0..layout.room_count() {
        let room = &layout.rooms()[index];
        let id = room.id();
        let edges: Vec<Coord> = room.edge_coords().iter().copied().collect();

        for edge in edges {
            for dir in Direction::CARDINAL {
                let single = edge.step(dir);
                let double = single.step(dir);
                if !layout.grid().is_wall(single) || !layout.grid().is_wall(double) {
                    continue;
                }
                if try_attach(layout, id, single) {
                    trace!(room = %id, cell = %single, %dir, "collapsed double wall");
                    attached += 1;
                    break;
                }
            }
        }
    }

    attached
}

/// Collapse double walls until a sweep changes nothing
///
/// Edge sets are refreshed before the first sweep and after every sweep, so
/// walls three or more cells thick are thinned one layer per sweep. Returns
/// the total number of cells attached.
pub fn collapse_double_walls(layout: &mut Layout) -> usize {
    layout.refresh_edges();

    let mut total = 0;
    let mut sweeps = 0;
    loop {
        let attached = collapse_pass(layout);
        layout.refresh_edges();
        sweeps += 1;
        total += attached;
        if attached == 0 {
            break;
        }
    }

    debug!(collapsed = total, sweeps, "double walls collapsed");
    total
}

/// Edge cells that still face a double wall only their own room borders
///
/// Empty after `collapse_double_walls`.
pub fn unresolved_double_walls(layout: &Layout) -> Vec<(RoomId, Coord, Direction)> {
    let mut found = Vec::new();
    for room in layout.rooms() {
        for &edge in &room.compute_edge_coords() {
            for dir in Direction::CARDINAL {
                let single = edge.step(dir);
                let double = single.step(dir);
                if layout.grid().is_wall(single)
                    && layout.grid().is_wall(double)
                    && !layout.grid().is_border(single)
                    && layout.surrounding_rooms(single) == [room.id()]
                {
                    found.push((room.id(), edge, dir));
                }
            }
        }
    }
    found
}

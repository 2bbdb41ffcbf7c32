//! Room seeding and expansion
//!
//! Repeatedly picks an unclaimed cell, samples a target size, grows a room
//! over the free part of that rectangle and walls it in, until no open cell
//! remains. Every iteration claims at least the seed, so this terminates.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::coord::Coord;
use super::layout::Layout;
use super::room::RoomId;
use crate::config::{GeneratorConfig, SeedStrategy};
use crate::rng::LayoutRng;

/// Claim the free cells of the `width` x `height` rectangle anchored at
/// `seed` (seed is the top-left corner) as a new room.
///
/// Cells are claimed by flooding from the seed through unoccupied cells
/// inside the rectangle, so the room stays connected when an earlier wall
/// cuts across the rectangle.
pub(crate) fn expand_room(
    layout: &mut Layout,
    seed: Coord,
    width: usize,
    height: usize,
) -> Option<RoomId> {
    let id = layout.create_room(seed)?;

    let span_x = i32::try_from(width.max(1) - 1).unwrap_or(i32::MAX);
    let span_y = i32::try_from(height.max(1) - 1).unwrap_or(i32::MAX);
    let far = Coord::new(seed.x.saturating_add(span_x), seed.y.saturating_add(span_y));
    let inside = |c: Coord| c.x >= seed.x && c.y >= seed.y && c.x <= far.x && c.y <= far.y;

    let mut frontier = VecDeque::from([seed]);
    while let Some(c) = frontier.pop_front() {
        for n in c.cardinal_neighbours() {
            if inside(n) && layout.claim_floor(id, n) {
                frontier.push_back(n);
            }
        }
    }

    Some(id)
}

/// One random cell per partition of the interior, partitions visited
/// column by column
///
/// The interior is split into `columns` x `rows` near-equal bands; the
/// first `len % parts` bands on each axis are one cell wider.
pub fn partition_seeds(
    width: usize,
    height: usize,
    columns: usize,
    rows: usize,
    rng: &mut LayoutRng,
) -> Vec<Coord> {
    let interior_w = width.saturating_sub(2);
    let interior_h = height.saturating_sub(2);
    if columns == 0 || rows == 0 || columns > interior_w || rows > interior_h {
        return Vec::new();
    }

    let bands = |len: usize, parts: usize| -> Vec<(usize, usize)> {
        let base = len / parts;
        let remainder = len % parts;
        (0..parts)
            .map(|i| {
                let start = 1 + i * base + i.min(remainder);
                let size = base + usize::from(i < remainder);
                (start, start + size - 1)
            })
            .collect()
    };

    let x_bands = bands(interior_w, columns);
    let y_bands = bands(interior_h, rows);

    let mut seeds = Vec::with_capacity(columns * rows);
    for &(x_lo, x_hi) in &x_bands {
        for &(y_lo, y_hi) in &y_bands {
            let x = rng.range_inclusive(x_lo, x_hi);
            let y = rng.range_inclusive(y_lo, y_hi);
            seeds.push(Coord::new(x as i32, y as i32));
        }
    }
    seeds
}

/// Yields seed cells according to a `SeedStrategy`
struct SeedPicker {
    strategy: SeedStrategy,
    /// Partition seeds still to try, in reverse order
    queued: Vec<Coord>,
    /// Row-major scan position
    cursor: usize,
}

impl SeedPicker {
    fn new(layout: &Layout, strategy: SeedStrategy, rng: &mut LayoutRng) -> Self {
        let mut queued = match strategy {
            SeedStrategy::Partitioned { columns, rows } => {
                partition_seeds(layout.width(), layout.height(), columns, rows, rng)
            }
            SeedStrategy::Uniform | SeedStrategy::Scan => Vec::new(),
        };
        queued.reverse();
        Self {
            strategy,
            queued,
            cursor: 0,
        }
    }

    fn next(&mut self, layout: &Layout, rng: &mut LayoutRng) -> Option<Coord> {
        match self.strategy {
            SeedStrategy::Scan => {
                let occupancy = layout.occupancy();
                while self.cursor < occupancy.len() && occupancy[self.cursor] {
                    self.cursor += 1;
                }
                if self.cursor >= occupancy.len() {
                    return None;
                }
                let width = layout.width();
                Some(Coord::new(
                    (self.cursor % width) as i32,
                    (self.cursor / width) as i32,
                ))
            }
            SeedStrategy::Partitioned { .. } => {
                while let Some(c) = self.queued.pop() {
                    if layout.grid().is_free(c) {
                        return Some(c);
                    }
                }
                layout.grid().random_open(rng)
            }
            SeedStrategy::Uniform => layout.grid().random_open(rng),
        }
    }
}

/// Seed and expand rooms until no open cell remains
///
/// Returns the number of rooms placed.
pub fn seed_rooms(layout: &mut Layout, config: &GeneratorConfig, rng: &mut LayoutRng) -> usize {
    let mut picker = SeedPicker::new(layout, config.seeding, rng);
    let mut placed = 0;

    while layout.grid().has_open() {
        let Some(seed) = picker.next(layout, rng) else {
            break;
        };
        let width = rng.range_inclusive(config.room_width.min, config.room_width.max);
        let height = rng.range_inclusive(config.room_height.min, config.room_height.max);

        let Some(id) = layout.place_room(seed, width, height) else {
            break;
        };
        placed += 1;

        if let Some(room) = layout.room(id) {
            trace!(
                room = %id,
                seed = %seed,
                target_w = width,
                target_h = height,
                area = room.area(),
                walls = room.walls().len(),
                "placed room"
            );
        }
    }

    debug!(rooms = placed, "seeding complete");
    placed
}

//! Rooms: connected floor regions and the walls and doors they own

use core::fmt;
use std::collections::BTreeSet;

use super::coord::Coord;

/// Opaque room identity, stable for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) u32);

impl RoomId {
    /// Position of the room in `Layout::rooms()`
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// A room and the cells it owns
///
/// The sets are only mutated through `Layout`, which mirrors every change
/// into the grid-global sets.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    start: Coord,
    pub(crate) coords: BTreeSet<Coord>,
    pub(crate) edge_coords: BTreeSet<Coord>,
    pub(crate) walls: BTreeSet<Coord>,
    pub(crate) doors: BTreeSet<Coord>,
}

impl Room {
    pub(crate) fn new(id: RoomId, start: Coord) -> Self {
        Self {
            id,
            start,
            coords: BTreeSet::from([start]),
            edge_coords: BTreeSet::new(),
            walls: BTreeSet::new(),
            doors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Seed cell the room grew from
    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn coords(&self) -> &BTreeSet<Coord> {
        &self.coords
    }

    /// Floor cells with a cardinal neighbour outside the room
    pub fn edge_coords(&self) -> &BTreeSet<Coord> {
        &self.edge_coords
    }

    pub fn walls(&self) -> &BTreeSet<Coord> {
        &self.walls
    }

    pub fn doors(&self) -> &BTreeSet<Coord> {
        &self.doors
    }

    pub fn area(&self) -> usize {
        self.coords.len()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// Inclusive bounding box as (min, max) corners
    pub fn bounds(&self) -> (Coord, Coord) {
        let mut min = self.start;
        let mut max = self.start;
        for c in &self.coords {
            min = Coord::new(min.x.min(c.x), min.y.min(c.y));
            max = Coord::new(max.x.max(c.x), max.y.max(c.y));
        }
        (min, max)
    }

    /// Floor cells with at least one cardinal neighbour not in the room
    ///
    /// Out-of-bounds neighbours count as outside, so no bounds are needed.
    pub fn compute_edge_coords(&self) -> BTreeSet<Coord> {
        self.coords
            .iter()
            .copied()
            .filter(|c| c.cardinal_neighbours().any(|n| !self.coords.contains(&n)))
            .collect()
    }

    /// Rederive `edge_coords` from the current footprint
    pub fn refresh_edges(&mut self) {
        self.edge_coords = self.compute_edge_coords();
    }
}

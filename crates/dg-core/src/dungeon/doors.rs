//! Door graph: candidate discovery, spanning-tree selection, extra doors
//!
//! Rooms are nodes, wall cells shared by two rooms are edges. A random
//! spanning forest over those edges connects every room that can be
//! connected without creating a cycle; a fraction of the leftover candidates
//! is then opened as well.

use tracing::{debug, trace};

use super::coord::Coord;
use super::layout::Layout;
use super::room::{Room, RoomId};
use super::union_find::UnionFind;
use crate::rng::LayoutRng;

/// A wall cell and the two rooms it separates (`rooms.0 < rooms.1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoorCandidate {
    pub coord: Coord,
    pub rooms: (RoomId, RoomId),
}

/// Doors chosen for one layout
#[derive(Debug, Clone, Default)]
pub struct DoorSelection {
    /// Spanning-forest doors, in selection order
    pub spanning: Vec<DoorCandidate>,
    /// Extra doors that add cycles
    pub extra: Vec<DoorCandidate>,
}

impl DoorSelection {
    pub fn len(&self) -> usize {
        self.spanning.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spanning.is_empty() && self.extra.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DoorCandidate> {
        self.spanning.iter().chain(self.extra.iter())
    }
}

/// Counts from one door-building run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorReport {
    pub candidates: usize,
    pub spanning: usize,
    pub extra: usize,
}

/// Wall cells whose cardinal neighbours belong to exactly two rooms
///
/// Each wall cell yields at most one candidate. A wall touching three or
/// more rooms is skipped so no coordinate ever holds more than one door.
pub fn find_candidates(layout: &Layout) -> Vec<DoorCandidate> {
    let mut candidates = Vec::new();
    for &wall in layout.walls() {
        let touching = layout.cardinal_rooms(wall);
        match touching.as_slice() {
            &[a, b] => candidates.push(DoorCandidate {
                coord: wall,
                rooms: (a, b),
            }),
            [_, _, _, ..] => {
                trace!(cell = %wall, rooms = touching.len(), "wall borders too many rooms");
            }
            _ => {}
        }
    }
    candidates
}

/// Pick doors: a random spanning forest, then `extra_chance` of the rest
///
/// Candidates are visited in a uniformly shuffled order; one that joins two
/// not-yet-connected rooms is selected. Once every room is in one set, the
/// remaining candidates are only eligible as extras.
/// `floor(unselected * extra_chance)` extras are drawn without replacement.
pub fn select_doors(
    rooms: &[Room],
    mut candidates: Vec<DoorCandidate>,
    extra_chance: f64,
    rng: &mut LayoutRng,
) -> DoorSelection {
    rng.shuffle(&mut candidates);

    let mut sets = UnionFind::from_keys(rooms.iter().map(Room::id));
    let mut spanning = Vec::new();
    let mut unselected = Vec::new();

    for candidate in candidates {
        let (a, b) = candidate.rooms;
        if sets.set_count() > 1 && sets.union(a, b) {
            spanning.push(candidate);
        } else {
            unselected.push(candidate);
        }
    }

    let chance = if extra_chance.is_nan() {
        0.0
    } else {
        extra_chance.clamp(0.0, 1.0)
    };
    let extra_count = ((unselected.len() as f64 * chance).floor() as usize).min(unselected.len());
    rng.shuffle(&mut unselected);
    unselected.truncate(extra_count);

    DoorSelection {
        spanning,
        extra: unselected,
    }
}

/// Turn every selected candidate's wall into a door on both rooms
///
/// Returns the number of doors opened.
pub fn materialize_doors(layout: &mut Layout, selection: &DoorSelection) -> usize {
    selection
        .iter()
        .filter(|door| layout.open_door(door.coord, door.rooms.0, door.rooms.1))
        .count()
}

/// Discover candidates, select and open doors
pub fn build_doors(layout: &mut Layout, extra_chance: f64, rng: &mut LayoutRng) -> DoorReport {
    let candidates = find_candidates(layout);
    let report_candidates = candidates.len();

    if candidates.is_empty() && layout.room_count() > 1 {
        debug!(rooms = layout.room_count(), "no door candidates, rooms stay disconnected");
    }

    let selection = select_doors(layout.rooms(), candidates, extra_chance, rng);
    let opened = materialize_doors(layout, &selection);

    let report = DoorReport {
        candidates: report_candidates,
        spanning: selection.spanning.len(),
        extra: selection.extra.len(),
    };
    debug!(
        candidates = report.candidates,
        spanning = report.spanning,
        extra = report.extra,
        opened,
        "doors built"
    );
    report
}

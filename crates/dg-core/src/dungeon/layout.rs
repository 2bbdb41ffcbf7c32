//! Layout: the grid plus its rooms, kept in step with each other
//!
//! Rooms own their `coords`/`walls`/`doors`; the grid holds the global
//! projection of those sets. Every mutation here updates the room, the grid
//! and the coordinate -> room indexes in the same step.

use std::collections::BTreeSet;

use hashbrown::HashMap;

use super::coord::Coord;
use super::grid::{CellKind, Claim, Grid};
use super::room::{Room, RoomId};
use super::union_find::UnionFind;
use super::{seeder, walls};

/// Generated dungeon layout
#[derive(Debug, Clone)]
pub struct Layout {
    grid: Grid,
    rooms: Vec<Room>,
    /// Floor cell -> room whose `coords` contain it
    room_index: HashMap<Coord, RoomId>,
    /// Wall cell -> room whose `walls` contain it (border walls are unowned)
    wall_index: HashMap<Coord, RoomId>,
}

impl Layout {
    /// Empty layout: walled border, open interior, no rooms
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rooms: Vec::new(),
            room_index: HashMap::new(),
            wall_index: HashMap::new(),
        }
    }

    /// Grow one room from `seed` toward a `width` x `height` rectangle and
    /// surround it with walls.
    ///
    /// Returns `None` if `seed` is out of bounds or already claimed.
    pub fn place_room(&mut self, seed: Coord, width: usize, height: usize) -> Option<RoomId> {
        let id = seeder::expand_room(self, seed, width, height)?;
        walls::synthesize_walls(self, id);
        Some(id)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Row-major occupancy, `width * height` entries
    pub fn occupancy(&self) -> &[bool] {
        self.grid.occupancy()
    }

    pub fn is_occupied(&self, c: Coord) -> bool {
        self.grid.is_occupied(c)
    }

    pub fn cell_kind(&self, c: Coord) -> Option<CellKind> {
        self.grid.cell_kind(c)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Room whose floor contains `c`
    pub fn room_at(&self, c: Coord) -> Option<RoomId> {
        self.room_index.get(&c).copied()
    }

    /// Room owning the wall at `c`, `None` for border or non-wall cells
    pub fn wall_owner(&self, c: Coord) -> Option<RoomId> {
        self.wall_index.get(&c).copied()
    }

    pub fn walls(&self) -> &BTreeSet<Coord> {
        self.grid.walls()
    }

    pub fn doors(&self) -> &BTreeSet<Coord> {
        self.grid.doors()
    }

    pub fn room_cells(&self) -> &BTreeSet<Coord> {
        self.grid.rooms()
    }

    pub fn open_cells(&self) -> &[Coord] {
        self.grid.open_cells()
    }

    /// Distinct rooms whose floor touches `c` cardinally, in id order
    pub fn cardinal_rooms(&self, c: Coord) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = c
            .cardinal_neighbours()
            .filter_map(|n| self.room_at(n))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Distinct rooms whose floor touches `c` in any of the 8 directions
    pub fn surrounding_rooms(&self, c: Coord) -> Vec<RoomId> {
        let mut ids: Vec<RoomId> = c.neighbours().filter_map(|n| self.room_at(n)).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Number of room groups joined by doors
    ///
    /// A door joins every room whose floor touches it cardinally.
    pub fn connected_components(&self) -> usize {
        let mut sets = UnionFind::new();
        for room in &self.rooms {
            sets.make_set(room.id());
        }
        for &door in self.grid.doors() {
            let touching = self.cardinal_rooms(door);
            for pair in touching.windows(2) {
                sets.union(pair[0], pair[1]);
            }
        }
        sets.set_count()
    }

    /// True when every room is reachable from every other through doors
    pub fn is_connected(&self) -> bool {
        self.connected_components() <= 1
    }

    /// Claim `start` as the seed of a new room
    pub(crate) fn create_room(&mut self, start: Coord) -> Option<RoomId> {
        let id = RoomId(u32::try_from(self.rooms.len()).ok()?);
        if !self.grid.claim(start, Claim::Room) {
            return None;
        }
        self.rooms.push(Room::new(id, start));
        self.room_index.insert(start, id);
        Some(id)
    }

    /// Claim an open cell as floor of `id`
    pub(crate) fn claim_floor(&mut self, id: RoomId, c: Coord) -> bool {
        if id.index() >= self.rooms.len() || !self.grid.claim(c, Claim::Room) {
            return false;
        }
        self.rooms[id.index()].coords.insert(c);
        self.room_index.insert(c, id);
        true
    }

    /// Claim an open cell as a wall owned by `id`
    pub(crate) fn claim_wall(&mut self, id: RoomId, c: Coord) -> bool {
        if id.index() >= self.rooms.len() || !self.grid.claim(c, Claim::Wall) {
            return false;
        }
        self.rooms[id.index()].walls.insert(c);
        self.wall_index.insert(c, id);
        true
    }

    fn release_wall(&mut self, c: Coord) -> Option<RoomId> {
        let owner = self.wall_index.remove(&c)?;
        self.rooms[owner.index()].walls.remove(&c);
        Some(owner)
    }

    /// Turn a wall cell into floor of `id`
    pub(crate) fn wall_to_floor(&mut self, id: RoomId, c: Coord) -> bool {
        if id.index() >= self.rooms.len() || !self.grid.wall_to_room(c) {
            return false;
        }
        self.release_wall(c);
        self.rooms[id.index()].coords.insert(c);
        self.room_index.insert(c, id);
        true
    }

    /// Make `id` the owner of the non-border wall at `c`
    pub(crate) fn adopt_wall(&mut self, id: RoomId, c: Coord) -> bool {
        if id.index() >= self.rooms.len() || !self.grid.is_wall(c) || self.grid.is_border(c) {
            return false;
        }
        if self.wall_owner(c) == Some(id) {
            return true;
        }
        self.release_wall(c);
        self.rooms[id.index()].walls.insert(c);
        self.wall_index.insert(c, id);
        true
    }

    /// Turn the wall at `c` into a door between `a` and `b`
    pub(crate) fn open_door(&mut self, c: Coord, a: RoomId, b: RoomId) -> bool {
        if a.index() >= self.rooms.len() || b.index() >= self.rooms.len() {
            return false;
        }
        if !self.grid.wall_to_door(c) {
            return false;
        }
        self.release_wall(c);
        self.rooms[a.index()].doors.insert(c);
        self.rooms[b.index()].doors.insert(c);
        true
    }

    /// Rederive every room's edge cells
    pub fn refresh_edges(&mut self) {
        for room in &mut self.rooms {
            room.refresh_edges();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_room_in_open_space() {
        let mut layout = Layout::new(10, 10);
        let id = layout.place_room(Coord::new(2, 2), 3, 3).unwrap();
        let room = layout.room(id).unwrap();

        assert_eq!(room.area(), 9);
        // 5x5 ring around a 3x3 room
        assert_eq!(room.walls().len(), 16);
        for c in room.coords() {
            assert_eq!(layout.room_at(*c), Some(id));
        }
        for w in room.walls() {
            assert_eq!(layout.wall_owner(*w), Some(id));
            assert_eq!(layout.cell_kind(*w), Some(CellKind::Wall));
        }
    }

    #[test]
    fn test_place_room_rejects_claimed_seed() {
        let mut layout = Layout::new(10, 10);
        assert!(layout.place_room(Coord::new(0, 0), 2, 2).is_none());
        let id = layout.place_room(Coord::new(3, 3), 1, 1).unwrap();
        assert!(layout.place_room(Coord::new(3, 3), 2, 2).is_none());
        assert!(layout.place_room(Coord::new(4, 4), 2, 2).is_none());
        assert_eq!(layout.room_count(), 1);
        assert_eq!(layout.room(id).unwrap().area(), 1);
    }

    #[test]
    fn test_wall_to_floor_moves_ownership() {
        let mut layout = Layout::new(10, 10);
        let id = layout.place_room(Coord::new(2, 2), 2, 2).unwrap();
        let wall = Coord::new(4, 2);
        assert_eq!(layout.wall_owner(wall), Some(id));

        assert!(layout.wall_to_floor(id, wall));
        assert_eq!(layout.wall_owner(wall), None);
        assert_eq!(layout.room_at(wall), Some(id));
        assert!(layout.room(id).unwrap().contains(wall));
        assert!(!layout.room(id).unwrap().walls().contains(&wall));
        assert_eq!(layout.cell_kind(wall), Some(CellKind::Room));
    }

    #[test]
    fn test_adopt_wall_skips_border() {
        let mut layout = Layout::new(10, 10);
        let a = layout.place_room(Coord::new(1, 1), 2, 2).unwrap();
        let b = layout.place_room(Coord::new(5, 5), 2, 2).unwrap();
        let wall = Coord::new(4, 4);
        assert_eq!(layout.wall_owner(wall), Some(b));

        assert!(layout.adopt_wall(a, wall));
        assert_eq!(layout.wall_owner(wall), Some(a));
        assert!(!layout.room(b).unwrap().walls().contains(&wall));
        assert!(layout.room(a).unwrap().walls().contains(&wall));

        assert!(!layout.adopt_wall(a, Coord::new(0, 1)));
        assert_eq!(layout.wall_owner(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_connected_components() {
        // Two rooms split by column x = 3
        let mut layout = Layout::new(7, 3);
        let a = layout.place_room(Coord::new(1, 1), 2, 1).unwrap();
        let b = layout.place_room(Coord::new(4, 1), 2, 1).unwrap();
        assert_eq!(layout.connected_components(), 2);
        assert!(!layout.is_connected());

        assert!(layout.open_door(Coord::new(3, 1), a, b));
        assert_eq!(layout.connected_components(), 1);
        assert!(layout.is_connected());
    }
}

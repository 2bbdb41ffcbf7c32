//! Grid state: bounded occupancy table plus the open/wall/room/door partition
//!
//! Every in-bounds cell belongs to exactly one of the four sets. A cell is
//! claimed once (open -> room or open -> wall) and afterwards only moves
//! wall -> room (double-wall repair) or wall -> door (door selection).

use std::collections::BTreeSet;

use hashbrown::HashMap;
use strum::Display;

use super::coord::Coord;
use crate::rng::LayoutRng;

/// Classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CellKind {
    Open,
    Wall,
    Room,
    Door,
}

/// What an open cell can be claimed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    Room,
    Wall,
}

/// Unclaimed cells, with O(1) removal and uniform random pick
#[derive(Debug, Clone, Default)]
struct OpenCells {
    cells: Vec<Coord>,
    slots: HashMap<Coord, usize>,
}

impl OpenCells {
    fn insert(&mut self, c: Coord) {
        if self.slots.contains_key(&c) {
            return;
        }
        self.slots.insert(c, self.cells.len());
        self.cells.push(c);
    }

    fn remove(&mut self, c: Coord) -> bool {
        let Some(slot) = self.slots.remove(&c) else {
            return false;
        };
        self.cells.swap_remove(slot);
        if let Some(&moved) = self.cells.get(slot) {
            self.slots.insert(moved, slot);
        }
        true
    }
}

/// Bounded 2D occupancy store (true = claimed by a room, wall or door)
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Row-major occupancy
    occupied: Vec<bool>,
    open: OpenCells,
    walls: BTreeSet<Coord>,
    rooms: BTreeSet<Coord>,
    doors: BTreeSet<Coord>,
}

impl Grid {
    /// Border cells become occupied walls, interior cells start open.
    ///
    /// Dimensions are clamped to at least 1; callers validate them first.
    pub fn new(width: usize, height: usize) -> Self {
        let width = i32::try_from(width.max(1)).unwrap_or(i32::MAX);
        let height = i32::try_from(height.max(1)).unwrap_or(i32::MAX);
        let cells = width as usize * height as usize;

        let mut grid = Self {
            width,
            height,
            occupied: vec![false; cells],
            open: OpenCells::default(),
            walls: BTreeSet::new(),
            rooms: BTreeSet::new(),
            doors: BTreeSet::new(),
        };

        for y in 0..height {
            for x in 0..width {
                let c = Coord::new(x, y);
                if grid.is_border(c) {
                    grid.walls.insert(c);
                    grid.set_occupied(c);
                } else {
                    grid.open.insert(c);
                }
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    pub fn is_border(&self, c: Coord) -> bool {
        self.in_bounds(c)
            && (c.x == 0 || c.y == 0 || c.x == self.width - 1 || c.y == self.height - 1)
    }

    fn index(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c)
            .then(|| c.y as usize * self.width as usize + c.x as usize)
    }

    fn set_occupied(&mut self, c: Coord) {
        if let Some(i) = self.index(c) {
            self.occupied[i] = true;
        }
    }

    /// Out-of-bounds cells read as unoccupied
    pub fn is_occupied(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| self.occupied[i])
    }

    /// In bounds and not yet claimed
    pub fn is_free(&self, c: Coord) -> bool {
        self.index(c).is_some_and(|i| !self.occupied[i])
    }

    /// Move `c` from open to the room or wall set.
    ///
    /// Returns false (and changes nothing) if `c` is out of bounds or
    /// already occupied.
    pub fn claim(&mut self, c: Coord, kind: Claim) -> bool {
        if !self.is_free(c) {
            return false;
        }
        self.open.remove(c);
        self.set_occupied(c);
        match kind {
            Claim::Room => self.rooms.insert(c),
            Claim::Wall => self.walls.insert(c),
        };
        true
    }

    /// Reclassify a wall cell as room floor
    pub fn wall_to_room(&mut self, c: Coord) -> bool {
        if !self.walls.remove(&c) {
            return false;
        }
        self.rooms.insert(c);
        true
    }

    /// Reclassify a wall cell as a door
    pub fn wall_to_door(&mut self, c: Coord) -> bool {
        if !self.walls.remove(&c) {
            return false;
        }
        self.doors.insert(c);
        true
    }

    pub fn cell_kind(&self, c: Coord) -> Option<CellKind> {
        if !self.in_bounds(c) {
            return None;
        }
        let kind = if self.rooms.contains(&c) {
            CellKind::Room
        } else if self.walls.contains(&c) {
            CellKind::Wall
        } else if self.doors.contains(&c) {
            CellKind::Door
        } else {
            CellKind::Open
        };
        Some(kind)
    }

    pub fn is_wall(&self, c: Coord) -> bool {
        self.walls.contains(&c)
    }

    /// Row-major occupancy table, `width * height` entries
    pub fn occupancy(&self) -> &[bool] {
        &self.occupied
    }

    pub fn walls(&self) -> &BTreeSet<Coord> {
        &self.walls
    }

    pub fn rooms(&self) -> &BTreeSet<Coord> {
        &self.rooms
    }

    pub fn doors(&self) -> &BTreeSet<Coord> {
        &self.doors
    }

    /// Unclaimed cells, in no particular order
    pub fn open_cells(&self) -> &[Coord] {
        &self.open.cells
    }

    pub fn open_count(&self) -> usize {
        self.open.cells.len()
    }

    pub fn has_open(&self) -> bool {
        !self.open.cells.is_empty()
    }

    /// Uniformly random unclaimed cell
    pub fn random_open(&self, rng: &mut LayoutRng) -> Option<Coord> {
        rng.choose(&self.open.cells).copied()
    }

    /// Every in-bounds coordinate, row-major
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_border() {
        let grid = Grid::new(6, 4);
        assert_eq!(grid.width(), 6);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.walls().len(), 2 * 6 + 2 * 2);
        assert_eq!(grid.open_count(), 4 * 2);

        for c in grid.coords() {
            let border = c.x == 0 || c.y == 0 || c.x == 5 || c.y == 3;
            assert_eq!(grid.is_border(c), border);
            assert_eq!(grid.is_occupied(c), border);
            let expected = if border { CellKind::Wall } else { CellKind::Open };
            assert_eq!(grid.cell_kind(c), Some(expected));
        }
    }

    #[test]
    fn test_claim_once() {
        let mut grid = Grid::new(5, 5);
        let c = Coord::new(2, 2);
        assert!(grid.claim(c, Claim::Room));
        assert!(!grid.claim(c, Claim::Wall));
        assert_eq!(grid.cell_kind(c), Some(CellKind::Room));
        assert!(!grid.open_cells().contains(&c));
        assert_eq!(grid.open_count(), 8);

        // Border and out-of-bounds cells cannot be claimed
        assert!(!grid.claim(Coord::new(0, 2), Claim::Room));
        assert!(!grid.claim(Coord::new(-1, 2), Claim::Room));
        assert!(!grid.claim(Coord::new(5, 5), Claim::Wall));
    }

    #[test]
    fn test_reclassify_wall() {
        let mut grid = Grid::new(5, 5);
        let a = Coord::new(1, 1);
        let b = Coord::new(2, 1);
        grid.claim(a, Claim::Wall);
        grid.claim(b, Claim::Wall);

        assert!(grid.wall_to_room(a));
        assert_eq!(grid.cell_kind(a), Some(CellKind::Room));
        assert!(grid.wall_to_door(b));
        assert_eq!(grid.cell_kind(b), Some(CellKind::Door));

        // Only walls can be reclassified
        assert!(!grid.wall_to_door(a));
        assert!(!grid.wall_to_room(Coord::new(3, 3)));
        assert!(grid.is_occupied(a) && grid.is_occupied(b));
    }

    #[test]
    fn test_open_cells_swap_remove() {
        let mut grid = Grid::new(6, 6);
        let mut rng = LayoutRng::new(9);
        while let Some(c) = grid.random_open(&mut rng) {
            assert!(grid.is_free(c));
            assert!(grid.claim(c, Claim::Room));
        }
        assert!(!grid.has_open());
        assert_eq!(grid.rooms().len(), 16);
        assert!(grid.occupancy().iter().all(|&o| o));
    }
}

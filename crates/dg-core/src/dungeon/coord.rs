//! Grid coordinates and neighbourhood offsets

use core::fmt;
use core::ops::{Add, Mul};

use strum::{Display, EnumIter};

/// One grid cell, compared and hashed by value
///
/// Ordering is row-major (`y` first) so ordered sets iterate the way the map
/// reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub y: i32,
    pub x: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbour one step in `dir`
    pub fn step(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    /// The 4 cardinal neighbours
    pub fn cardinal_neighbours(self) -> impl Iterator<Item = Coord> {
        Direction::CARDINAL.into_iter().map(move |d| self.step(d))
    }

    /// The 8 Chebyshev neighbours
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        CHEBYSHEV_OFFSETS.into_iter().map(move |o| self + o)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Fixed probing order for cardinal scans
    pub const CARDINAL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    pub const fn offset(self) -> Coord {
        match self {
            Direction::East => Coord::new(1, 0),
            Direction::West => Coord::new(-1, 0),
            Direction::South => Coord::new(0, 1),
            Direction::North => Coord::new(0, -1),
        }
    }
}

/// Offsets of the 8 cells surrounding a cell
pub const CHEBYSHEV_OFFSETS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(0, -1),
    Coord::new(1, -1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(-1, 1),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

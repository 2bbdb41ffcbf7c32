//! Dungeon layout system
//!
//! Grid state, rooms, wall synthesis, double-wall collapsing and the door
//! graph, plus the pipeline that runs them in order.

mod collapse;
mod coord;
mod doors;
mod generation;
mod grid;
mod layout;
mod room;
mod seeder;
mod union_find;
mod walls;

pub use collapse::{collapse_double_walls, collapse_pass, unresolved_double_walls};
pub use coord::{Coord, Direction, CHEBYSHEV_OFFSETS};
pub use doors::{
    build_doors, find_candidates, materialize_doors, select_doors, DoorCandidate, DoorReport,
    DoorSelection,
};
pub use generation::{generate, generate_connected, GeneratedLayout, GenerationStats};
pub use grid::{CellKind, Claim, Grid};
pub use layout::Layout;
pub use room::{Room, RoomId};
pub use seeder::{partition_seeds, seed_rooms};
pub use union_find::UnionFind;
pub use walls::synthesize_walls;

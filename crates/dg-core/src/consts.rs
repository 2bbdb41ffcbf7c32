//! Default generation parameters

/// Default grid dimensions
pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 50;

/// Default room extent on each axis (inclusive)
pub const DEFAULT_ROOM_MIN: usize = 3;
pub const DEFAULT_ROOM_MAX: usize = 8;

/// Default fraction of leftover door candidates opened after the spanning tree
pub const DEFAULT_EXTRA_DOOR_CHANCE: f64 = 0.1;

/// Smallest grid that still has an interior cell
pub const MIN_GRID_DIM: usize = 3;

/// Largest accepted grid dimension
pub const MAX_GRID_DIM: usize = 4096;

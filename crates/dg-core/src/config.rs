//! Generator configuration
//!
//! A small set of numeric parameters supplied at generation start. Every
//! field has a default so a partial JSON document is a valid configuration.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::consts::{
    DEFAULT_EXTRA_DOOR_CHANCE, DEFAULT_HEIGHT, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_WIDTH,
    MAX_GRID_DIM, MIN_GRID_DIM,
};
use crate::error::ConfigError;

/// Grid axis, used to label configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

/// Inclusive size range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
}

impl SizeRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::EmptyRoomRange { axis });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRoomRange {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_MIN, DEFAULT_ROOM_MAX)
    }
}

/// How the seeder picks the next seed cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SeedStrategy {
    /// Uniformly random open cell
    #[default]
    Uniform,
    /// Lowest open cell in row-major order
    Scan,
    /// One random cell per partition of the interior, then `Uniform`
    Partitioned { columns: usize, rows: usize },
}

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells, border included
    pub width: usize,
    /// Grid height in cells, border included
    pub height: usize,
    /// Target room width, sampled per room
    pub room_width: SizeRange,
    /// Target room height, sampled per room
    pub room_height: SizeRange,
    /// Fraction of non-tree door candidates that also become doors
    pub extra_door_chance: f64,
    pub seeding: SeedStrategy,
    /// Run the double-wall collapse pass
    pub collapse_double_walls: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_width: SizeRange::default(),
            room_height: SizeRange::default(),
            extra_door_chance: DEFAULT_EXTRA_DOOR_CHANCE,
            seeding: SeedStrategy::default(),
            collapse_double_walls: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Use the same range for room width and height
    pub fn with_room_size(mut self, min: usize, max: usize) -> Self {
        self.room_width = SizeRange::new(min, max);
        self.room_height = SizeRange::new(min, max);
        self
    }

    pub fn with_room_width(mut self, range: SizeRange) -> Self {
        self.room_width = range;
        self
    }

    pub fn with_room_height(mut self, range: SizeRange) -> Self {
        self.room_height = range;
        self
    }

    pub fn with_extra_door_chance(mut self, chance: f64) -> Self {
        self.extra_door_chance = chance;
        self
    }

    pub fn with_seeding(mut self, seeding: SeedStrategy) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn with_collapse(mut self, enabled: bool) -> Self {
        self.collapse_double_walls = enabled;
        self
    }

    /// Reject degenerate parameters before generation starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_DIM || self.height < MIN_GRID_DIM {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_GRID_DIM,
            });
        }
        if self.width > MAX_GRID_DIM || self.height > MAX_GRID_DIM {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_DIM,
            });
        }

        self.room_width.validate(Axis::Width)?;
        self.room_height.validate(Axis::Height)?;

        if !(0.0..=1.0).contains(&self.extra_door_chance) {
            return Err(ConfigError::ExtraDoorChance(self.extra_door_chance));
        }

        if let SeedStrategy::Partitioned { columns, rows } = self.seeding {
            for (axis, count, interior) in [
                (Axis::Width, columns, self.width - 2),
                (Axis::Height, rows, self.height - 2),
            ] {
                if count == 0 || count > interior {
                    return Err(ConfigError::InvalidPartitions {
                        axis,
                        count,
                        interior,
                    });
                }
            }
        }

        Ok(())
    }
}

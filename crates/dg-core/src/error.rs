//! Error types for layout generation
//!
//! Configuration problems are rejected before any generation work starts.
//! Data-dependent outcomes (a room with no neighbours, a disconnected room
//! graph) are not errors of `generate`; only the retrying entry point turns
//! a disconnected result into an error.

use thiserror::Error;

use crate::config::Axis;

/// Invalid generator parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small, both sides must be at least {min}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("grid {width}x{height} is too large, both sides must be at most {max}")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("room {axis} range must start at 1 or more")]
    EmptyRoomRange { axis: Axis },

    #[error("room {axis} range is inverted: min {min} > max {max}")]
    InvertedRoomRange { axis: Axis, min: usize, max: usize },

    #[error("extra door chance {0} is outside [0, 1]")]
    ExtraDoorChance(f64),

    #[error("{count} partitions along {axis} do not fit an interior of {interior} cells")]
    InvalidPartitions {
        axis: Axis,
        count: usize,
        interior: usize,
    },
}

/// Failure of a generation entry point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no connected layout after {attempts} attempts (last one had {components} components)")]
    Disconnected { attempts: u32, components: usize },
}

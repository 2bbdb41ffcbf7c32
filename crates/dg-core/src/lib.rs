//! dg-core: grid dungeon layout generation
//!
//! Carves a bounded grid into disjoint rooms ringed by single-thickness
//! walls and joins them with doors chosen by a random spanning tree. There
//! is no I/O here; renderers and mesh builders read the finished `Layout`.
//!
//! ```
//! use dg_core::{generate, GeneratorConfig, LayoutRng};
//!
//! let config = GeneratorConfig::new(40, 30).with_room_size(3, 6);
//! let mut rng = LayoutRng::new(7);
//! let generated = generate(&config, &mut rng).unwrap();
//! assert!(generated.layout.room_count() > 0);
//! ```

pub mod config;
pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use config::{Axis, GeneratorConfig, SeedStrategy, SizeRange};
pub use consts::*;
pub use dungeon::{generate, generate_connected, GeneratedLayout, GenerationStats, Layout};
pub use error::{ConfigError, GenerationError};
pub use rng::LayoutRng;

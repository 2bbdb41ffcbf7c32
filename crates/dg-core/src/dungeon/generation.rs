//! Layout generation pipeline
//!
//! Validate the configuration, seed and wall rooms until the grid is full,
//! collapse double walls, then build the door graph.

use tracing::{debug, info};

use super::collapse::collapse_double_walls;
use super::doors::build_doors;
use super::layout::Layout;
use super::seeder::seed_rooms;
use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerationError};
use crate::rng::LayoutRng;

/// Counts from one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub rooms: usize,
    /// Wall cells handed to rooms by the double-wall pass
    pub collapsed_cells: usize,
    pub candidates: usize,
    pub mst_doors: usize,
    pub extra_doors: usize,
}

impl GenerationStats {
    pub fn doors(&self) -> usize {
        self.mst_doors + self.extra_doors
    }
}

/// A finished layout and how it was built
#[derive(Debug, Clone)]
pub struct GeneratedLayout {
    pub layout: Layout,
    pub stats: GenerationStats,
}

/// Generate one layout
///
/// The configuration is validated before any work is done. A layout whose
/// rooms end up disconnected is still returned; see `generate_connected`.
pub fn generate(
    config: &GeneratorConfig,
    rng: &mut LayoutRng,
) -> Result<GeneratedLayout, ConfigError> {
    config.validate()?;

    let mut layout = Layout::new(config.width, config.height);

    let rooms = seed_rooms(&mut layout, config, rng);
    layout.refresh_edges();

    let collapsed_cells = if config.collapse_double_walls {
        collapse_double_walls(&mut layout)
    } else {
        0
    };

    let doors = build_doors(&mut layout, config.extra_door_chance, rng);

    let stats = GenerationStats {
        rooms,
        collapsed_cells,
        candidates: doors.candidates,
        mst_doors: doors.spanning,
        extra_doors: doors.extra,
    };
    info!(
        seed = rng.seed(),
        width = config.width,
        height = config.height,
        rooms = stats.rooms,
        doors = stats.doors(),
        "layout generated"
    );

    Ok(GeneratedLayout { layout, stats })
}

/// Generate until every room is reachable, trying `seed`, `seed + 1`, ...
///
/// Returns the layout and the seed that produced it. At least one attempt
/// is always made.
pub fn generate_connected(
    config: &GeneratorConfig,
    seed: u64,
    max_attempts: u32,
) -> Result<(GeneratedLayout, u64), GenerationError> {
    config.validate()?;

    let attempts = max_attempts.max(1);
    let mut components = 0;
    for attempt in 0..attempts {
        let attempt_seed = seed.wrapping_add(u64::from(attempt));
        let mut rng = LayoutRng::new(attempt_seed);
        let generated = generate(config, &mut rng)?;

        components = generated.layout.connected_components();
        if components <= 1 {
            return Ok((generated, attempt_seed));
        }
        debug!(attempt, seed = attempt_seed, components, "layout disconnected, retrying");
    }

    Err(GenerationError::Disconnected {
        attempts,
        components,
    })
}

//! Command-line arguments and their mapping onto a generator config

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use dg_core::{GeneratorConfig, SeedStrategy, SizeRange};

/// Partition grid used when `--seeding partitioned` is given without one
const DEFAULT_PARTITIONS: (usize, usize) = (4, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Seeding {
    Uniform,
    Scan,
    Partitioned,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "dungeongen")]
#[command(version)]
#[command(about = "Generate a grid dungeon of rooms, walls and doors", long_about = None)]
pub struct Args {
    /// JSON generator config; flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width, border included
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height, border included
    #[arg(long)]
    pub height: Option<usize>,

    /// Smallest room extent on both axes
    #[arg(long)]
    pub room_min: Option<usize>,

    /// Largest room extent on both axes
    #[arg(long)]
    pub room_max: Option<usize>,

    /// Fraction of leftover door candidates to open, in [0, 1]
    #[arg(short = 'x', long)]
    pub extra_doors: Option<f64>,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// How seed cells are picked
    #[arg(long, value_enum)]
    pub seeding: Option<Seeding>,

    /// Partition grid for partitioned seeding, as COLUMNSxROWS [default: 4x4]
    #[arg(long, value_parser = parse_partitions)]
    pub partitions: Option<(usize, usize)>,

    /// Keep double walls
    #[arg(long)]
    pub no_collapse: bool,

    /// Retry with successive seeds until all rooms are connected, up to N tries
    #[arg(long, value_name = "N")]
    pub connected: Option<u32>,

    /// Log generation phases to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_partitions(s: &str) -> Result<(usize, usize), String> {
    let (columns, rows) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected COLUMNSxROWS, got '{s}'"))?;
    let columns = columns
        .trim()
        .parse()
        .map_err(|e| format!("bad column count '{columns}': {e}"))?;
    let rows = rows
        .trim()
        .parse()
        .map_err(|e| format!("bad row count '{rows}': {e}"))?;
    Ok((columns, rows))
}

/// Replace the bounds given on the command line; a lone bound drags the
/// other one along if the range would otherwise be inverted
fn override_range(range: SizeRange, min: Option<usize>, max: Option<usize>) -> SizeRange {
    match (min, max) {
        (Some(min), Some(max)) => SizeRange::new(min, max),
        (Some(min), None) => SizeRange::new(min, range.max.max(min)),
        (None, Some(max)) => SizeRange::new(range.min.min(max), max),
        (None, None) => range,
    }
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    pub fn to_config(&self) -> Result<GeneratorConfig> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => GeneratorConfig::default(),
        };
        self.apply_to(base)
    }

    /// Apply command-line overrides to `config` and validate the result
    pub fn apply_to(&self, mut config: GeneratorConfig) -> Result<GeneratorConfig> {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        if let (Some(min), Some(max)) = (self.room_min, self.room_max) {
            if min > max {
                bail!("--room-min {min} is larger than --room-max {max}");
            }
        }
        config.room_width = override_range(config.room_width, self.room_min, self.room_max);
        config.room_height = override_range(config.room_height, self.room_min, self.room_max);

        if let Some(chance) = self.extra_doors {
            config.extra_door_chance = chance;
        }

        if let Some(seeding) = self.seeding {
            config.seeding = match seeding {
                Seeding::Uniform => SeedStrategy::Uniform,
                Seeding::Scan => SeedStrategy::Scan,
                Seeding::Partitioned => match config.seeding {
                    SeedStrategy::Partitioned { .. } => config.seeding,
                    _ => SeedStrategy::Partitioned {
                        columns: DEFAULT_PARTITIONS.0,
                        rows: DEFAULT_PARTITIONS.1,
                    },
                },
            };
        }
        if let (Some((columns, rows)), SeedStrategy::Partitioned { .. }) =
            (self.partitions, config.seeding)
        {
            config.seeding = SeedStrategy::Partitioned { columns, rows };
        }

        if self.no_collapse {
            config.collapse_double_walls = false;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dungeongen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = parse(&[
            "--width", "30", "--height", "20", "--room-min", "2", "--room-max", "4", "-x", "0.5",
            "--seeding", "partitioned", "--partitions", "3x2", "--no-collapse",
        ]);
        let config = args.to_config().unwrap();
        assert_eq!(config.width, 30);
        assert_eq!(config.height, 20);
        assert_eq!(config.room_width, SizeRange::new(2, 4));
        assert_eq!(config.room_height, SizeRange::new(2, 4));
        assert_eq!(config.extra_door_chance, 0.5);
        assert_eq!(
            config.seeding,
            SeedStrategy::Partitioned { columns: 3, rows: 2 }
        );
        assert!(!config.collapse_double_walls);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(parse(&["--width", "2"]).to_config().is_err());
        assert!(parse(&["--room-min", "5", "--room-max", "3"]).to_config().is_err());
        assert!(parse(&["-x", "1.5"]).to_config().is_err());
        assert!(Args::try_parse_from(["dungeongen", "--partitions", "3by2"]).is_err());
    }

    #[test]
    fn test_lone_room_bound_keeps_each_axis() {
        let base = GeneratorConfig::new(40, 40)
            .with_room_width(SizeRange::new(2, 6))
            .with_room_height(SizeRange::new(4, 10));

        let config = parse(&["--room-min", "3"]).apply_to(base.clone()).unwrap();
        assert_eq!(config.room_width, SizeRange::new(3, 6));
        assert_eq!(config.room_height, SizeRange::new(3, 10));

        let config = parse(&["--room-max", "5"]).apply_to(base.clone()).unwrap();
        assert_eq!(config.room_width, SizeRange::new(2, 5));
        assert_eq!(config.room_height, SizeRange::new(4, 5));

        // A lone bound past the other end drags it along
        let config = parse(&["--room-min", "8"]).apply_to(base.clone()).unwrap();
        assert_eq!(config.room_width, SizeRange::new(8, 8));
        assert_eq!(config.room_height, SizeRange::new(8, 10));

        let config = parse(&[]).apply_to(base.clone()).unwrap();
        assert_eq!(config, base);
    }

    #[test]
    fn test_partitions_follow_partitioned_seeding() {
        let partitioned = GeneratorConfig::new(30, 30)
            .with_seeding(SeedStrategy::Partitioned { columns: 2, rows: 2 });

        let config = parse(&["--partitions", "3x2"]).apply_to(partitioned.clone()).unwrap();
        assert_eq!(config.seeding, SeedStrategy::Partitioned { columns: 3, rows: 2 });

        let config = parse(&["--seeding", "partitioned"]).apply_to(partitioned.clone()).unwrap();
        assert_eq!(config.seeding, SeedStrategy::Partitioned { columns: 2, rows: 2 });

        let config = parse(&["--seeding", "partitioned"]).to_config().unwrap();
        assert_eq!(config.seeding, SeedStrategy::Partitioned { columns: 4, rows: 4 });

        // Other strategies have no partition grid to apply it to
        let config = parse(&["--partitions", "3x2"]).to_config().unwrap();
        assert_eq!(config.seeding, SeedStrategy::Uniform);
        let config = parse(&["--seeding", "scan", "--partitions", "3x2"])
            .apply_to(partitioned)
            .unwrap();
        assert_eq!(config.seeding, SeedStrategy::Scan);
    }

    #[test]
    fn test_config_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"width": 24, "room_height": {{"min": 4, "max": 9}},
                "seeding": {{"kind": "partitioned", "columns": 2, "rows": 2}}}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path, "--room-max", "6", "--partitions", "5x3"])
            .to_config()
            .unwrap();
        assert_eq!(config.width, 24);
        assert_eq!(config.room_width, SizeRange::new(3, 6));
        assert_eq!(config.room_height, SizeRange::new(4, 6));
        assert_eq!(config.seeding, SeedStrategy::Partitioned { columns: 5, rows: 3 });

        assert!(parse(&["--config", "/nonexistent/dungeongen.json"]).to_config().is_err());
    }

    #[test]
    fn test_parse_partitions() {
        assert_eq!(parse_partitions("4x3"), Ok((4, 3)));
        assert_eq!(parse_partitions("2X5"), Ok((2, 5)));
        assert!(parse_partitions("4").is_err());
        assert!(parse_partitions("ax3").is_err());
    }
}

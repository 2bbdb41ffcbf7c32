//! dungeongen: print a generated dungeon layout
//!
//! The map goes to stdout, logs go to stderr.

mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use dg_core::{generate, generate_connected, LayoutRng};
use tracing_subscriber::EnvFilter;

use cli::Args;

fn init_logging(verbose: bool) {
    let default = if verbose { "dg_core=debug,dungeongen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.to_config()?;
    tracing::debug!(?config, "configuration");

    let seed = args.seed.unwrap_or_else(rand_seed);
    let (generated, seed) = match args.connected {
        Some(attempts) => generate_connected(&config, seed, attempts)?,
        None => (generate(&config, &mut LayoutRng::new(seed))?, seed),
    };

    print!("{}", render::render_ascii(&generated.layout));
    println!("{}", render::summary(&generated.layout, &generated.stats, seed));
    Ok(())
}

fn rand_seed() -> u64 {
    LayoutRng::from_entropy().seed()
}

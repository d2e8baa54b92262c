//! Quadtree overlap benchmark binary.

use std::path::PathBuf;

use quadtree_bench::{Bench, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Quadtree bench v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match std::env::args_os().nth(1) {
        Some(path) => Config::load_from(&PathBuf::from(path))?,
        None => Config::load()?,
    };
    info!("Loaded configuration");
    info!("  Plane: {}x{}", config.tree.width, config.tree.height);
    info!("  Capacity: {}", config.tree.capacity);
    info!("  Rounds: {} x {} points", config.run.rounds, config.run.points);
    info!("  Parallel: {}", config.run.parallel);

    let reports = Bench::new(config)?.run()?;
    for report in &reports {
        info!(
            "Round {}: {} nodes, depth {}, build {:?}, query {:?}",
            report.round, report.nodes, report.depth, report.build_time, report.query_time
        );
    }

    Ok(())
}

//! Benchmark configuration.

use quadtree::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "bench.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from `bench.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::parse(&contents)?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.validate()?;
        Ok(config)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let TreeConfig {
            capacity,
            width,
            height,
            origin,
        } = self.tree;
        anyhow::ensure!(capacity > 0, "tree.capacity must be at least 1");
        anyhow::ensure!(
            origin.x.is_finite() && origin.y.is_finite(),
            "tree.origin must be finite, got {origin}"
        );
        anyhow::ensure!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "tree plane must have a positive size, got {width} x {height}"
        );
        let extent = self.run.query_half_extent;
        anyhow::ensure!(
            extent.is_finite() && extent > 0.0,
            "run.query_half_extent must be positive, got {extent}"
        );
        Ok(())
    }
}

/// Root node settings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Points a node holds before it subdivides.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Full width of the plane. The root is centered on it.
    #[serde(default = "default_plane")]
    pub width: f64,
    /// Full height of the plane.
    #[serde(default = "default_plane")]
    pub height: f64,
    /// Corner of the plane with the smallest coordinates.
    #[serde(default)]
    pub origin: Point,
}

impl TreeConfig {
    /// Center of the plane, used as the root center.
    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height / 2.0)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            width: default_plane(),
            height: default_plane(),
            origin: Point::default(),
        }
    }
}

fn default_capacity() -> usize {
    4
}
fn default_plane() -> f64 {
    200.0
}

/// Round settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Number of build/query/clear rounds.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Points generated per round.
    #[serde(default = "default_points")]
    pub points: usize,
    /// Half-extent of the window queried around every point.
    #[serde(default = "default_query_half_extent")]
    pub query_half_extent: f64,
    /// Count overlaps on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
    /// Fixed RNG seed; random from the OS when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            points: default_points(),
            query_half_extent: default_query_half_extent(),
            parallel: false,
            seed: None,
        }
    }
}

fn default_rounds() -> usize {
    5
}
fn default_points() -> usize {
    20000
}
fn default_query_half_extent() -> f64 {
    10.0
}

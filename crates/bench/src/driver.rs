//! Overlap benchmark rounds.
//!
//! Each round fills the tree with uniform random points, asks for the
//! overlapping neighbours of every point and clears the tree again. Pairs are
//! counted once from each side, so the total is twice the number of pairs.

use std::time::{Duration, Instant};

use anyhow::Context;
use quadtree::{Point, Quadtree, Rectangle};
use rand::distr::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Config;

/// Outcome of a single round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub round: usize,
    pub points: usize,
    /// Overlap finds, counting each pair twice.
    pub overlaps: u64,
    pub nodes: usize,
    pub depth: usize,
    pub build_time: Duration,
    pub query_time: Duration,
}

/// Reusable benchmark state: one tree, one point list, one RNG.
pub struct Bench {
    config: Config,
    tree: Quadtree,
    points: Vec<Point>,
    rng: StdRng,
}

impl Bench {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let bounds = Rectangle::new(
            config.tree.center(),
            config.tree.width / 2.0,
            config.tree.height / 2.0,
        );
        let tree = Quadtree::new(bounds, config.tree.capacity).context("Failed to create root node")?;
        let rng = match config.run.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let points = Vec::with_capacity(config.run.points);

        Ok(Self {
            config,
            tree,
            points,
            rng,
        })
    }

    pub fn tree(&self) -> &Quadtree {
        &self.tree
    }

    /// Run every configured round.
    pub fn run(&mut self) -> anyhow::Result<Vec<RoundReport>> {
        (0..self.config.run.rounds)
            .map(|round| self.run_round(round))
            .collect()
    }

    /// Build, count, clear.
    pub fn run_round(&mut self, round: usize) -> anyhow::Result<RoundReport> {
        let run = &self.config.run;
        let plane = self.config.tree;

        let start = Instant::now();
        for _ in 0..run.points {
            let p = random_point(&mut self.rng, plane.origin, plane.width, plane.height);
            self.tree
                .insert(p)
                .with_context(|| format!("Round {round}: failed to index {p}"))?;
            self.points.push(p);
        }
        let build_time = start.elapsed();
        let nodes = self.tree.node_count();
        let depth = self.tree.depth();
        debug!(round, nodes, depth, ?build_time, "Tree built");

        let start = Instant::now();
        let overlaps = if run.parallel {
            count_overlaps_parallel(&self.tree, &self.points, run.query_half_extent)
        } else {
            count_overlaps(&self.tree, &self.points, run.query_half_extent)
        };
        let query_time = start.elapsed();

        info!("Round {}: Found {} overlapping points", round, overlaps);
        debug!(round, ?query_time, "Overlaps counted");

        let report = RoundReport {
            round,
            points: self.points.len(),
            overlaps,
            nodes,
            depth,
            build_time,
            query_time,
        };

        self.tree.clear();
        self.points.clear();
        Ok(report)
    }
}

/// A uniform point strictly inside the `w × h` plane starting at `origin`.
pub fn random_point<R: Rng>(rng: &mut R, origin: Point, w: f64, h: f64) -> Point {
    let x: f64 = rng.sample(Open01);
    let y: f64 = rng.sample(Open01);
    Point::new(origin.x + x * w, origin.y + y * h)
}

/// Sum of overlap finds over every point, on the current thread.
pub fn count_overlaps(tree: &Quadtree, points: &[Point], radius: f64) -> u64 {
    points
        .iter()
        .map(|p| tree.points_overlapping(*p, radius).len() as u64)
        .sum()
}

/// Same as [`count_overlaps`], spread over the rayon pool.
pub fn count_overlaps_parallel(tree: &Quadtree, points: &[Point], radius: f64) -> u64 {
    points
        .par_iter()
        .map(|p| tree.points_overlapping(*p, radius).len() as u64)
        .sum()
}

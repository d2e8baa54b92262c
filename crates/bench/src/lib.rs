//! Overlap-counting benchmark driver for the quadtree crate.

pub mod config;
pub mod driver;

pub use config::Config;
pub use driver::{Bench, RoundReport};

//! Region quadtree for 2D point proximity queries.
//!
//! This crate contains:
//! - Geometry primitives (`Point`, `Rectangle`, `Quadrant`)
//! - The `Quadtree` itself (insert, range query, overlap query, clear)
//! - `QuadtreeError` for rejected inserts and invalid roots

mod error;
mod geometry;
mod quadtree;

pub use error::QuadtreeError;
pub use geometry::{Point, Quadrant, Rectangle};
pub use quadtree::{OVERLAP_DISTANCE, Quadtree};

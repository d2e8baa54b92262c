//! Quadtree error types.

use thiserror::Error;

use crate::{Point, Rectangle};

/// Errors that can occur while building or filling a quadtree.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    /// No child of a split node contains the point. The point lies exactly on
    /// a dividing line or outside the root bounds.
    #[error("Insert could not find a subtree for {point} in {bounds}")]
    Unroutable { point: Point, bounds: Rectangle },

    #[error("Node capacity must be at least 1")]
    ZeroCapacity,

    #[error("Invalid root half-extents: {width} x {height}")]
    InvalidBounds { width: f64, height: f64 },
}

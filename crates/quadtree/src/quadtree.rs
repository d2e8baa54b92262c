//! Region quadtree over points.
//!
//! Each node keeps up to `capacity` points in its own bucket. The first insert
//! that finds a full bucket splits the node into four quadrants; from then on
//! the bucket is frozen and every new point is routed to a child. Existing
//! bucket points are never pushed down.

use tracing::{debug, trace};

use crate::{Point, Quadrant, QuadtreeError, Rectangle};

/// Points closer than this are counted as overlapping.
pub const OVERLAP_DISTANCE: f64 = 3.0;

/// A quadtree node. The root is just a node built with [`Quadtree::new`].
#[derive(Debug, Clone)]
pub struct Quadtree {
    bounds: Rectangle,
    capacity: usize,
    points: Vec<Point>,
    /// Set on first subdivision, indexed by [`Quadrant::index`].
    children: Option<Box<[Quadtree; 4]>>,
}

impl Quadtree {
    /// Create an empty tree covering `bounds`.
    pub fn new(bounds: Rectangle, capacity: usize) -> Result<Self, QuadtreeError> {
        if capacity == 0 {
            return Err(QuadtreeError::ZeroCapacity);
        }
        let valid = |e: f64| e.is_finite() && e > 0.0;
        if !valid(bounds.width) || !valid(bounds.height) {
            return Err(QuadtreeError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self::leaf(bounds, capacity))
    }

    /// Create an empty tree centered at `(x, y)` with half-extents `w` and `h`.
    pub fn with_extent(
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        capacity: usize,
    ) -> Result<Self, QuadtreeError> {
        Self::new(Rectangle::new(Point::new(x, y), w, h), capacity)
    }

    fn leaf(bounds: Rectangle, capacity: usize) -> Self {
        Self {
            bounds,
            capacity,
            points: Vec::with_capacity(capacity),
            children: None,
        }
    }

    #[inline]
    pub fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points stored directly in this node.
    #[inline]
    pub fn bucket(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> Option<&[Quadtree; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, q: Quadrant) -> Option<&Quadtree> {
        self.children.as_ref().map(|c| &c[q.index()])
    }

    /// Insert a point.
    ///
    /// Fails with [`QuadtreeError::Unroutable`] when the node is split and no
    /// child contains the point (it sits on a dividing line or outside the
    /// root). The tree is left unchanged apart from a possible subdivision.
    pub fn insert(&mut self, point: Point) -> Result<(), QuadtreeError> {
        if self.children.is_none() && self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        let bounds = self.bounds;
        let capacity = self.capacity;
        let children = self.children.get_or_insert_with(|| {
            trace!(%bounds, "Subdividing quadtree node");
            Box::new(Quadrant::ALL.map(|q| Quadtree::leaf(bounds.quadrant(q), capacity)))
        });

        match children.iter_mut().find(|c| c.bounds.contains(&point)) {
            Some(child) => child.insert(point),
            None => Err(QuadtreeError::Unroutable { point, bounds }),
        }
    }

    /// All points inside `rect`, bucket first, then children in
    /// [`Quadrant::ALL`] order.
    pub fn query(&self, rect: &Rectangle) -> Vec<Point> {
        let mut found = Vec::new();
        self.query_into(rect, &mut found);
        found
    }

    /// Like [`query`](Self::query), appending into a caller-owned buffer.
    pub fn query_into(&self, rect: &Rectangle, found: &mut Vec<Point>) {
        if !self.bounds.intersects(rect) {
            return;
        }

        found.extend(self.points.iter().filter(|p| rect.contains(p)));

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.query_into(rect, found);
            }
        }
    }

    /// Points strictly closer than [`OVERLAP_DISTANCE`] to `point`, searched
    /// within a square window of half-extent `radius`. The point itself (and
    /// any exact duplicate of it) is excluded.
    pub fn points_overlapping(&self, point: Point, radius: f64) -> Vec<Point> {
        let mut found = self.query(&Rectangle::around(point, radius));
        found.retain(|other| *other != point && point.distance_to(other) < OVERLAP_DISTANCE);
        found
    }

    /// Remove every point and collapse the node back into a leaf.
    pub fn clear(&mut self) {
        debug!(points = self.len(), nodes = self.node_count(), "Clearing quadtree");
        self.points.clear();
        self.children = None;
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len()
            + self
                .children
                .as_ref()
                .map_or(0, |c| c.iter().map(Quadtree::len).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children.is_none()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(Quadtree::node_count).sum())
    }

    /// Levels in this subtree. A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(Quadtree::depth).max().unwrap_or(0))
    }
}

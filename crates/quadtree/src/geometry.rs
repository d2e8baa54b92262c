//! Geometry primitives shared by the tree and its callers.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D point. Equality is exact coordinate equality.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four children of a split node.
///
/// "Top" is the half with the smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    /// Routing and traversal order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Axis-aligned rectangle stored as a center and half-extents.
///
/// `width` and `height` are *half* the side lengths: the box spans
/// `[x - width, x + width] × [y - height, y + height]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rectangle {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Square window of the given half-extent centered on `point`.
    #[inline]
    pub const fn around(point: Point, half_extent: f64) -> Self {
        Self::new(point, half_extent, half_extent)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.center.x - self.width
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.center.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.center.y - self.height
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.center.y + self.height
    }

    /// Open-interval containment: points on an edge are outside.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x > self.left() && p.x < self.right() && p.y > self.top() && p.y < self.bottom()
    }

    /// Closed-interval overlap: touching edges intersect.
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// The child rectangle covering one quadrant of this one.
    pub fn quadrant(&self, q: Quadrant) -> Rectangle {
        let w = self.width / 2.0;
        let h = self.height / 2.0;
        let (dx, dy) = match q {
            Quadrant::TopLeft => (-w, -h),
            Quadrant::TopRight => (w, -h),
            Quadrant::BottomLeft => (-w, h),
            Quadrant::BottomRight => (w, h),
        };
        Rectangle::new(Point::new(self.x() + dx, self.y() + dy), w, h)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.left(),
            self.right(),
            self.top(),
            self.bottom()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_contains_is_open() {
        let r = Rectangle::new(Point::new(10.0, 10.0), 5.0, 5.0);

        assert!(r.contains(&Point::new(10.0, 10.0)));
        assert!(r.contains(&Point::new(5.001, 14.999)));

        // Edges and corners are excluded.
        assert!(!r.contains(&Point::new(5.0, 10.0)));
        assert!(!r.contains(&Point::new(15.0, 10.0)));
        assert!(!r.contains(&Point::new(10.0, 5.0)));
        assert!(!r.contains(&Point::new(10.0, 15.0)));
        assert!(!r.contains(&Point::new(15.0, 15.0)));

        assert!(!r.contains(&Point::new(20.0, 10.0)));
    }

    #[test]
    fn test_intersects_is_closed() {
        let a = Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0);
        let b = Rectangle::new(Point::new(15.0, 15.0), 10.0, 10.0);
        let touching = Rectangle::new(Point::new(20.0, 0.0), 10.0, 10.0);
        let far = Rectangle::new(Point::new(50.0, 50.0), 10.0, 10.0);
        let inner = Rectangle::new(Point::new(1.0, 1.0), 1.0, 1.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(a.intersects(&inner));
        assert!(inner.intersects(&a));
        assert!(!a.intersects(&far));
        assert!(!far.intersects(&a));
    }

    #[test]
    fn test_quadrants() {
        let r = Rectangle::new(Point::new(100.0, 100.0), 100.0, 100.0);

        let tl = r.quadrant(Quadrant::TopLeft);
        assert_eq!(tl, Rectangle::new(Point::new(50.0, 50.0), 50.0, 50.0));
        assert_eq!(r.quadrant(Quadrant::TopRight).center, Point::new(150.0, 50.0));
        assert_eq!(r.quadrant(Quadrant::BottomLeft).center, Point::new(50.0, 150.0));
        assert_eq!(r.quadrant(Quadrant::BottomRight).center, Point::new(150.0, 150.0));

        // Quadrants tile the parent exactly.
        assert_eq!(tl.left(), r.left());
        assert_eq!(tl.top(), r.top());
        assert_eq!(tl.right(), r.x());
        assert_eq!(tl.bottom(), r.y());
    }

    #[test]
    fn test_quadrant_order() {
        for (i, q) in Quadrant::ALL.iter().enumerate() {
            assert_eq!(q.index(), i);
        }
    }

    #[test]
    fn test_dvec2_conversion() {
        let p = Point::new(1.5, -2.0);
        let v: DVec2 = p.into();
        assert_eq!(v, DVec2::new(1.5, -2.0));
        assert_eq!(Point::from(v), p);
    }
}

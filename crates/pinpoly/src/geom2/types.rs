//! Basic 2D integer types used by the predicates and `Polygon`.
//!
//! - `Coord`/`Point`: integer lattice points (nalgebra `Point2<i32>`).
//! - `BoundingBox`: axis-aligned box with an explicit empty state.
//!
//! Coordinates are integers on purpose: every predicate is evaluated exactly
//! (see `predicates::direction`), so there are no tolerances to configure.

use nalgebra::Point2;

/// Scalar coordinate type.
pub type Coord = i32;

/// Integer point in the plane. Copy value, no identity beyond `(x, y)`.
pub type Point = Point2<Coord>;

/// Axis-aligned bounding box `[xmin, xmax] × [ymin, ymax]` (inclusive).
///
/// The default box is empty: `xmin/ymin = Coord::MAX`, `xmax/ymax = Coord::MIN`,
/// so extending it with any point adopts that point's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub xmin: Coord,
    pub xmax: Coord,
    pub ymin: Coord,
    pub ymax: Coord,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            xmin: Coord::MAX,
            xmax: Coord::MIN,
            ymin: Coord::MAX,
            ymax: Coord::MIN,
        }
    }
}

impl BoundingBox {
    #[inline]
    pub fn new(xmin: Coord, xmax: Coord, ymin: Coord, ymax: Coord) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Smallest box enclosing all `points` (empty box for an empty slice).
    pub fn from_points(points: &[Point]) -> Self {
        let mut bbox = Self::default();
        for &p in points {
            bbox.extend(p);
        }
        bbox
    }

    /// Union with a single point. Min and max are updated independently.
    #[inline]
    pub fn extend(&mut self, p: Point) {
        self.xmin = self.xmin.min(p.x);
        self.xmax = self.xmax.max(p.x);
        self.ymin = self.ymin.min(p.y);
        self.ymax = self.ymax.max(p.y);
    }

    /// True until at least one point has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    /// Inclusive membership on all four sides.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        !(p.x < self.xmin || p.x > self.xmax || p.y < self.ymin || p.y > self.ymax)
    }

    /// Grow by `margin` on every side (saturating). Empty boxes stay empty.
    pub fn expanded(&self, margin: Coord) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            xmin: self.xmin.saturating_sub(margin),
            xmax: self.xmax.saturating_add(margin),
            ymin: self.ymin.saturating_sub(margin),
            ymax: self.ymax.saturating_add(margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_adopts_first_point() {
        let mut b = BoundingBox::default();
        assert!(b.is_empty());
        assert!(!b.contains(Point::new(0, 0)));
        b.extend(Point::new(3, -4));
        assert_eq!(b, BoundingBox::new(3, 3, -4, -4));
        assert!(b.contains(Point::new(3, -4)));
    }

    #[test]
    fn decreasing_coordinates_still_update_max() {
        // Each axis tracks min and max independently, so a descending run
        // keeps the first point as the max.
        let b = BoundingBox::from_points(&[
            Point::new(10, 10),
            Point::new(5, 5),
            Point::new(0, 0),
        ]);
        assert_eq!(b, BoundingBox::new(0, 10, 0, 10));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = BoundingBox::new(0, 10, 0, 10);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(10, 10)));
        assert!(b.contains(Point::new(10, 0)));
        assert!(!b.contains(Point::new(11, 5)));
        assert!(!b.contains(Point::new(5, -1)));
    }

    #[test]
    fn expanded_saturates() {
        let b = BoundingBox::new(Coord::MIN + 1, 0, 0, Coord::MAX - 1).expanded(5);
        assert_eq!(b.xmin, Coord::MIN);
        assert_eq!(b.ymax, Coord::MAX);
        assert_eq!(b.xmax, 5);
        assert!(BoundingBox::default().expanded(3).is_empty());
    }
}

//! Closed integer polygon with a cached bounding box and ray-casting containment.
//!
//! Purpose
//! - Own the vertex list of one finalized polygon and answer "is `p` inside?"
//!   in O(1) for points outside the bounding box and O(n) otherwise.
//!
//! Model
//! - Edges are `(v[i], v[i+1])` for `i in 0..n-1` plus the closing pair
//!   `(v[n-1], v[0])`. Callers close the ring explicitly (`v[0] == v[n-1]`);
//!   the closing pair is then a zero-length edge and never adds a crossing
//!   unless the ray passes through `v[0]`.
//! - Containment counts intersections between the query ray and every edge;
//!   the ray is the segment from the query point to `(xmin - 1, ymin)`, which
//!   lies strictly left of every vertex. Odd count means inside.
//! - Boundary points are not special-cased. Their classification is whatever
//!   the parity of touching intersections gives (left/bottom edges usually
//!   inside, right/top edges usually outside).
//! - The anchor is fixed, not generic: a ray passing exactly through a vertex
//!   counts both incident edges, so parity can flip for such query points.
//!   Points outside the bounding box are rejected before the scan.

use std::collections::HashSet;
use std::fmt;
use std::iter;

use super::predicates::Segment;
use super::types::{BoundingBox, Coord, Point};

/// Construction errors for [`Polygon`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// No vertices at all.
    Empty,
    /// Vertex `index` has `x == Coord::MIN`; the ray anchor `xmin - 1` would overflow.
    CoordinateOutOfRange { index: usize },
    /// First and last vertex differ (strict construction only).
    NotClosed,
    /// Fewer than 3 distinct vertices before closure (strict construction only).
    TooFewVertices { distinct: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::Empty => write!(f, "polygon has no vertices"),
            PolygonError::CoordinateOutOfRange { index } => write!(
                f,
                "vertex {} has x = {} (ray anchor would overflow)",
                index,
                Coord::MIN
            ),
            PolygonError::NotClosed => write!(f, "first and last vertex differ"),
            PolygonError::TooFewVertices { distinct } => write!(
                f,
                "polygon needs at least 3 distinct vertices, got {}",
                distinct
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Immutable polygon: vertex ring plus its exact bounding box.
///
/// Invariants:
/// - `vertices` is non-empty and every `x > Coord::MIN`.
/// - `bbox == BoundingBox::from_points(&vertices)`, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bbox: BoundingBox,
}

impl Polygon {
    /// Build from a vertex sequence as given.
    ///
    /// Unclosed or tiny inputs are accepted; they yield degenerate but
    /// well-defined containment results.
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        if vertices.is_empty() {
            return Err(PolygonError::Empty);
        }
        if let Some(index) = vertices.iter().position(|p| p.x == Coord::MIN) {
            return Err(PolygonError::CoordinateOutOfRange { index });
        }
        let bbox = BoundingBox::from_points(&vertices);
        Ok(Self { vertices, bbox })
    }

    /// Append `v[0]` if the ring is not already closed, then [`Polygon::new`].
    pub fn closed(mut vertices: Vec<Point>) -> Result<Self, PolygonError> {
        let Some(&first) = vertices.first() else {
            return Err(PolygonError::Empty);
        };
        if vertices.last() != Some(&first) {
            vertices.push(first);
        }
        Self::new(vertices)
    }

    /// Like [`Polygon::new`] but also requires an explicitly closed ring with
    /// at least 3 distinct vertices.
    pub fn new_strict(vertices: Vec<Point>) -> Result<Self, PolygonError> {
        let poly = Self::new(vertices)?;
        if !poly.is_closed() {
            return Err(PolygonError::NotClosed);
        }
        let ring = &poly.vertices[..poly.vertices.len() - 1];
        let distinct = ring.iter().collect::<HashSet<_>>().len();
        if distinct < 3 {
            return Err(PolygonError::TooFewVertices { distinct });
        }
        Ok(poly)
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// `v[0] == v[n-1]`.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Consecutive vertex pairs followed by the closing pair `(v[n-1], v[0])`.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let first = self.vertices[0];
        let last = self.vertices[self.vertices.len() - 1];
        self.vertices
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .chain(iter::once(Segment::new(last, first)))
    }

    #[inline]
    pub fn in_bounding_box(&self, p: Point) -> bool {
        self.bbox.contains(p)
    }

    /// Far end of the query ray: `(xmin - 1, ymin)`.
    #[inline]
    pub fn ray_anchor(&self) -> Point {
        Point::new(self.bbox.xmin - 1, self.bbox.ymin)
    }

    /// Number of edges hit by the segment from `p` to [`Polygon::ray_anchor`].
    ///
    /// No bounding-box shortcut; `in_polygon` is `in_bounding_box && odd`.
    pub fn crossings(&self, p: Point) -> usize {
        let ray = Segment::new(p, self.ray_anchor());
        self.edges().filter(|edge| ray.intersects(edge)).count()
    }

    /// Ray-casting containment with bounding-box rejection.
    pub fn in_polygon(&self, p: Point) -> bool {
        if !self.in_bounding_box(p) {
            return false;
        }
        self.crossings(p) % 2 == 1
    }
}

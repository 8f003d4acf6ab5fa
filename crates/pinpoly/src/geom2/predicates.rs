//! Exact orientation and segment-intersection predicates on integer points.
//!
//! Purpose
//! - `direction`: signed cross product, the single arithmetic primitive.
//! - `on_segment`: bounding-rectangle check for an already collinear point.
//! - `segment_intersect`: closed-segment intersection (CLRS 33.1), including
//!   shared endpoints, touching interiors and collinear overlap.
//!
//! Arithmetic
//! - Inputs are `i32`. Differences need 33 bits, products 66 bits and the final
//!   difference 67 bits, so everything is widened to `i128` before multiplying.
//!   The predicates are exact over the whole `i32` plane.

use std::cmp::Ordering;

use super::types::Point;

#[inline]
fn wide(p: Point) -> (i128, i128) {
    (i128::from(p.x), i128::from(p.y))
}

/// Turn from segment `pi→pj` to point `pk`: `cross(pk - pi, pj - pi)`.
///
/// Positive is clockwise, negative counterclockwise, zero collinear.
#[inline]
pub fn direction(pi: Point, pj: Point, pk: Point) -> i128 {
    let (ix, iy) = wide(pi);
    let (jx, jy) = wide(pj);
    let (kx, ky) = wide(pk);
    (kx - ix) * (jy - iy) - (jx - ix) * (ky - iy)
}

/// Sign of [`direction`] as a named turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

#[inline]
pub fn orientation(pi: Point, pj: Point, pk: Point) -> Orientation {
    match direction(pi, pj, pk).cmp(&0) {
        Ordering::Greater => Orientation::Clockwise,
        Ordering::Less => Orientation::CounterClockwise,
        Ordering::Equal => Orientation::Collinear,
    }
}

/// Whether `pk` lies in the closed axis-aligned rectangle spanned by `pi`, `pj`.
///
/// Pre: `pk` is collinear with `pi`, `pj` (not checked here).
#[inline]
pub fn on_segment(pi: Point, pj: Point, pk: Point) -> bool {
    pi.x.min(pj.x) <= pk.x
        && pk.x <= pi.x.max(pj.x)
        && pi.y.min(pj.y) <= pk.y
        && pk.y <= pi.y.max(pj.y)
}

#[inline]
fn straddles(a: i128, b: i128) -> bool {
    (a > 0 && b < 0) || (a < 0 && b > 0)
}

/// True iff closed segments `p1p2` and `p3p4` share at least one point.
pub fn segment_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let d1 = direction(p3, p4, p1);
    let d2 = direction(p3, p4, p2);
    let d3 = direction(p1, p2, p3);
    let d4 = direction(p1, p2, p4);

    if straddles(d1, d2) && straddles(d3, d4) {
        return true;
    }
    (d1 == 0 && on_segment(p3, p4, p1))
        || (d2 == 0 && on_segment(p3, p4, p2))
        || (d3 == 0 && on_segment(p1, p2, p3))
        || (d4 == 0 && on_segment(p1, p2, p4))
}

/// Closed segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        segment_intersect(self.a, self.b, other.a, other.b)
    }
}

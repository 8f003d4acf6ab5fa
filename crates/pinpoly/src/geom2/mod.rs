//! Exact 2D integer geometry: orientation, segment intersection, polygons.
//!
//! Purpose
//! - Provide a small, stateless kernel for point-in-polygon queries on
//!   integer lattice points, with no floating-point predicates.
//!
//! Layout
//! - `types`: `Point`, `Coord`, `BoundingBox`.
//! - `predicates`: `direction`, `orientation`, `on_segment`, `segment_intersect`.
//! - `polygon`: `Polygon` (immutable; bounding box + ray-casting containment).
//! - `rand`: deterministic star-polygon and query-point sampler.
//!
//! All types are plain values; a `Polygon` can be shared across threads for
//! concurrent read-only queries.

mod polygon;
mod predicates;
pub mod rand;
mod types;

pub use polygon::{Polygon, PolygonError};
pub use predicates::{direction, on_segment, orientation, segment_intersect, Orientation, Segment};
pub use types::{BoundingBox, Coord, Point};

//! Exact integer point-in-polygon kernel and a headless drawing session.
//!
//! - `geom2`: orientation predicate, segment intersection, `Polygon` with
//!   bounding-box rejection and ray-casting containment. Stateless.
//! - `session`: explicit state for the interactive tool (pending ring,
//!   finalized polygons, query cursor), driven by clicks and key commands.
//!
//! Coordinates are `i32`; predicates widen to `i128` and are exact over the
//! whole range. Polygon vertices additionally need `x > i32::MIN`.

pub mod geom2;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{
        direction, on_segment, orientation, segment_intersect, BoundingBox, Coord, Orientation,
        Point, Polygon, PolygonError, Segment,
    };
    pub use crate::session::{Command, Flow, Frame, Nudge, PolygonId, Session, SessionCfg};
}

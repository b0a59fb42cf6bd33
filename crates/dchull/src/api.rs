//! Full component surface of the hull core.
//!
//! `convex_hull` is the only entry point most callers need. The component
//! functions are exported for tests, benchmarks, and callers that already hold
//! x-separated hulls and want to merge them directly.

pub use crate::hull::{
    convex_hull, convex_hull_xy, leftmost, lower_tangent, merge, orientation, rightmost, turn,
    upper_tangent, Coord, HullError, Point, Polygon, Tangent, Turn,
};
pub use crate::sample::{draw_points, draw_points_disc, ReplayToken, SampleCfg, DEFAULT_SEED};

//! Divide-and-conquer convex hull of 2D point sets.
//!
//! - `hull`: the algorithm (orientation, extremal vertices, tangents, merge, recursion).
//! - `sample`: seeded point clouds for benchmarks and the CLI.
//!
//! The core does no I/O. Callers pass points in and get a ccw polygon back;
//! generation, timing, and reporting live in `sample`, `benches/`, and the CLI crate.

pub mod api;
pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, convex_hull_xy, HullError, Point, Polygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{convex_hull, convex_hull_xy, Coord, HullError, Point, Polygon};
    pub use crate::sample::{draw_points, draw_points_disc, ReplayToken, SampleCfg};
}

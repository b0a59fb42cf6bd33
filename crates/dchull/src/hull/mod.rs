//! Divide-and-conquer convex hull in 2D.
//!
//! Purpose
//! - Compute the ccw convex hull of a finite point set in O(n log n): sort and
//!   dedup once, split recursively, solve n <= 3 directly, merge sibling hulls
//!   through their upper and lower tangents.
//!
//! Components (leaves first)
//! - `orient`: exact orientation predicate in the coordinate's wide type.
//! - `extremal`: rightmost / leftmost vertex of a hull.
//! - `tangent`: upper / lower tangent of two x-separated hulls.
//! - `merge`: hull of the union of two x-separated hulls, degenerate cases first.
//! - `build`: `convex_hull` entry point and the recursion.
//!
//! Numerics
//! - Integer coordinates are exact (wide `i128`). Float coordinates use a strict
//!   zero test for colinearity; nearly colinear inputs keep their middle points.

mod build;
mod extremal;
mod merge;
mod orient;
mod tangent;
mod types;

pub use build::{convex_hull, convex_hull_xy};
pub use extremal::{leftmost, rightmost};
pub use merge::merge;
pub use orient::{orientation, turn, Turn};
pub use tangent::{lower_tangent, upper_tangent, Tangent};
pub use types::{Coord, HullError, Point, Polygon};

#[cfg(test)]
mod tests;

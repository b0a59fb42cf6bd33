//! Recursive divide-and-conquer hull builder (entry point).
//!
//! - Sort + dedup once into an owned buffer; recursion then works on
//!   sub-slices of that buffer (no per-level copies of the input).
//! - Base cases n <= 3 are solved directly; larger ranges split near the
//!   middle without separating a run of equal `x` when avoidable.
//!
//! Code cross-refs: `merge::merge`, `tangent::{upper_tangent, lower_tangent}`

use super::merge::merge;
use super::orient::{turn, Turn};
use super::types::{Coord, HullError, Point, Polygon};

/// Convex hull of `points` in ccw order.
///
/// - Empty input gives an empty polygon.
/// - Duplicates are removed; a single distinct point gives a 1-vertex polygon.
/// - A colinear input collapses to its two extreme points.
///
/// Errors:
/// - `NonFiniteCoordinate` if a float coordinate is NaN or infinite.
/// - `CoordinateOutOfRange` if an integer coordinate exceeds the range of
///   [`Coord`] (only reachable for `i64`, `|c| > 2^61`).
pub fn convex_hull<T: Coord>(points: &[Point<T>]) -> Result<Polygon<T>, HullError> {
    if points.is_empty() {
        return Ok(Polygon::default());
    }
    let sorted = sorted_distinct(points)?;
    let distinct = sorted.len();
    let hull = if distinct == 1 {
        Polygon::new(sorted)
    } else {
        solve(&sorted)?
    };
    tracing::debug!(
        input = points.len(),
        distinct,
        vertices = hull.len(),
        "convex_hull"
    );
    Ok(hull)
}

/// Tuple front-end of [`convex_hull`].
pub fn convex_hull_xy<T: Coord>(points: &[(T, T)]) -> Result<Vec<(T, T)>, HullError> {
    let pts: Vec<Point<T>> = points.iter().map(|&p| p.into()).collect();
    let hull = convex_hull(&pts)?;
    Ok(hull.into_vertices().into_iter().map(Into::into).collect())
}

fn sorted_distinct<T: Coord>(points: &[Point<T>]) -> Result<Vec<Point<T>>, HullError> {
    let mut pts = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(HullError::NonFiniteCoordinate { index });
        }
        if !p.in_range() {
            return Err(HullError::CoordinateOutOfRange { index });
        }
        pts.push(p.canonical());
    }
    pts.sort_unstable();
    pts.dedup();
    Ok(pts)
}

/// Hull of a sorted, duplicate-free range.
fn solve<T: Coord>(pts: &[Point<T>]) -> Result<Polygon<T>, HullError> {
    match *pts {
        [] | [_] | [_, _] => Ok(Polygon::new(pts.to_vec())),
        [a, b, c] => {
            let vertices = match turn(a, b, c) {
                Turn::Left => vec![a, b, c],
                Turn::Right => vec![a, c, b],
                Turn::Colinear => vec![a, c],
            };
            Ok(Polygon::new(vertices))
        }
        _ => {
            let (left, right) = pts.split_at(split_index(pts));
            merge(solve(left)?, solve(right)?)
        }
    }
}

/// Split point for a sorted range of length > 3.
///
/// Starts at `n / 2` and moves left past points sharing the middle `x`. If that
/// run reaches index 0, the plain midpoint is kept and equal `x` values straddle
/// the split.
pub(crate) fn split_index<T: Coord>(pts: &[Point<T>]) -> usize {
    let half = pts.len() / 2;
    let x = pts[half].x;
    let mut mid = half;
    while mid > 0 && pts[mid - 1].x == x {
        mid -= 1;
    }
    if mid == 0 {
        half
    } else {
        mid
    }
}

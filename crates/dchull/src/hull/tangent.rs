//! Upper and lower tangents between two x-separated convex polygons.
//!
//! Both searches start from the facing extremes (rightmost vertex of `left`,
//! leftmost vertex of `right`) and rotate the endpoints until the connecting
//! segment stops cutting into either polygon. A pass that moves neither
//! endpoint ends the search.
//!
//! Pre: both polygons are ccw, non-empty, and every vertex of `left` precedes
//! every vertex of `right` in `(x, y)` order. One- and two-vertex polygons are
//! fine: a step onto a repeated vertex has zero orientation and is never taken.

use super::extremal::{leftmost, rightmost};
use super::orient::orientation;
use super::types::{Coord, HullError, Point};

/// Vertex indices of a tangent segment, one per polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

#[inline]
fn next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Tangent bounding the union from above.
pub fn upper_tangent<T: Coord>(left: &[Point<T>], right: &[Point<T>]) -> Result<Tangent, HullError> {
    let (ln, rn) = (left.len(), right.len());
    let mut li = rightmost(left)?;
    let mut ri = leftmost(right)?;
    let zero = T::WIDE_ZERO;
    loop {
        let mut moved = false;
        while orientation(right[ri], left[li], left[next(li, ln)]) < zero {
            li = next(li, ln);
            moved = true;
        }
        while orientation(left[li], right[ri], right[prev(ri, rn)]) > zero {
            ri = prev(ri, rn);
            moved = true;
        }
        if !moved {
            return Ok(Tangent { left: li, right: ri });
        }
    }
}

/// Tangent bounding the union from below.
pub fn lower_tangent<T: Coord>(left: &[Point<T>], right: &[Point<T>]) -> Result<Tangent, HullError> {
    let (ln, rn) = (left.len(), right.len());
    let mut li = rightmost(left)?;
    let mut ri = leftmost(right)?;
    let zero = T::WIDE_ZERO;
    loop {
        let mut moved = false;
        while orientation(right[ri], left[li], left[prev(li, ln)]) > zero {
            li = prev(li, ln);
            moved = true;
        }
        while orientation(left[li], right[ri], right[next(ri, rn)]) < zero {
            ri = next(ri, rn);
            moved = true;
        }
        if !moved {
            return Ok(Tangent { left: li, right: ri });
        }
    }
}

//! Merge two x-separated convex hulls into the hull of their union.
//!
//! Order of checks:
//! 1. An empty side is the identity.
//! 2. A fully colinear union collapses to its two extreme points (tangents are
//!    undefined for zero-area hulls, so this runs before them).
//! 3. Two singletons form a segment (or one point if equal).
//! 4. Otherwise walk `left` from the upper to the lower tangent vertex, cross
//!    the lower bridge, and walk `right` back up to the upper tangent vertex.

use super::orient::orientation;
use super::tangent::{lower_tangent, upper_tangent};
use super::types::{Coord, HullError, Point, Polygon};

/// Hull of `left ∪ right`, in ccw order.
///
/// Pre: both inputs are ccw hulls and `left` lies entirely before `right` in
/// `(x, y)` order. Other inputs give an unspecified result.
pub fn merge<T: Coord>(left: Polygon<T>, right: Polygon<T>) -> Result<Polygon<T>, HullError> {
    if left.is_empty() {
        return Ok(right);
    }
    if right.is_empty() {
        return Ok(left);
    }
    if let Some(collapsed) = colinear_extremes(left.as_slice(), right.as_slice()) {
        return Ok(collapsed);
    }
    if let ([a], [b]) = (left.as_slice(), right.as_slice()) {
        let vertices = if a == b { vec![*a] } else { vec![*a, *b] };
        return Ok(Polygon::new(vertices));
    }

    let (l, r) = (left.as_slice(), right.as_slice());
    let upper = upper_tangent(l, r)?;
    let lower = lower_tangent(l, r)?;

    let mut out = Vec::with_capacity(l.len() + r.len());
    // left: upper.left ..= lower.left (ccw)
    let mut i = upper.left;
    loop {
        out.push(l[i]);
        if i == lower.left {
            break;
        }
        i = (i + 1) % l.len();
    }
    let bridge = r[lower.right];
    if l[lower.left] != bridge {
        out.push(bridge);
    }
    // right: lower.right ..= upper.right (ccw), bridge already emitted
    let mut j = lower.right;
    while j != upper.right {
        j = (j + 1) % r.len();
        out.push(r[j]);
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    Ok(Polygon::new(out))
}

/// `Some([min, max])` (or `Some([min])`) if every point of the union is colinear.
fn colinear_extremes<T: Coord>(left: &[Point<T>], right: &[Point<T>]) -> Option<Polygon<T>> {
    let union = || left.iter().chain(right.iter()).copied();
    let lo = union().min()?;
    let hi = union().max()?;
    if !union().all(|p| orientation(lo, hi, p) == T::WIDE_ZERO) {
        return None;
    }
    let vertices = if lo == hi { vec![lo] } else { vec![lo, hi] };
    Some(Polygon::new(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(v: &[(i64, i64)]) -> Polygon<i64> {
        Polygon::new(v.iter().map(|&p| p.into()).collect())
    }

    #[test]
    fn empty_side_is_identity() {
        let p = poly(&[(0, 0), (2, 0), (1, 1)]);
        assert_eq!(merge(Polygon::default(), p.clone()), Ok(p.clone()));
        assert_eq!(merge(p.clone(), Polygon::default()), Ok(p));
    }

    #[test]
    fn colinear_union_collapses() {
        assert_eq!(
            merge(poly(&[(0, 0), (1, 1)]), poly(&[(2, 2), (3, 3)])),
            Ok(poly(&[(0, 0), (3, 3)]))
        );
        assert_eq!(merge(poly(&[(1, 1)]), poly(&[(1, 1)])), Ok(poly(&[(1, 1)])));
    }

    #[test]
    fn two_singletons() {
        assert_eq!(
            merge(poly(&[(1, 1)]), poly(&[(2, 5)])),
            Ok(poly(&[(1, 1), (2, 5)]))
        );
    }

    #[test]
    fn triangles_drop_inner_vertex() {
        let left = poly(&[(0, 0), (1, -3), (2, 5)]);
        let right = poly(&[(8, 1), (9, -2), (10, 6)]);
        assert_eq!(
            merge(left, right),
            Ok(poly(&[(2, 5), (0, 0), (1, -3), (9, -2), (10, 6)]))
        );
    }

    #[test]
    fn triangle_with_point() {
        assert_eq!(
            merge(poly(&[(0, 0), (2, -1), (2, 1)]), poly(&[(5, 0)])),
            Ok(poly(&[(2, 1), (0, 0), (2, -1), (5, 0)]))
        );
        assert_eq!(
            merge(poly(&[(0, 0)]), poly(&[(3, -1), (5, 0), (3, 2)])),
            Ok(poly(&[(0, 0), (3, -1), (5, 0), (3, 2)]))
        );
    }

    #[test]
    fn inputs_are_not_shared() {
        let left = poly(&[(0, 0), (1, -1), (1, 1)]);
        let right = poly(&[(3, 0)]);
        let before = left.clone();
        let merged = merge(left.clone(), right).unwrap();
        assert_eq!(left, before);
        assert_eq!(merged.len(), 4);
    }
}

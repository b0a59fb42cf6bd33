use std::cmp::Ordering;

use super::types::{Coord, Point};

/// Twice the signed area of triangle `(a, b, c)`, evaluated in `T::Wide`.
/// Positive for a left (ccw) turn, negative for a right turn, zero if colinear.
#[inline]
pub fn orientation<T: Coord>(a: Point<T>, b: Point<T>, c: Point<T>) -> T::Wide {
    let (ax, ay) = (a.x.widen(), a.y.widen());
    (b.x.widen() - ax) * (c.y.widen() - ay) - (b.y.widen() - ay) * (c.x.widen() - ax)
}

/// Turn direction of `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Colinear,
}

/// Classify the sign of `orientation(a, b, c)`. The zero test is exact, also for floats.
#[inline]
pub fn turn<T: Coord>(a: Point<T>, b: Point<T>, c: Point<T>) -> Turn {
    match orientation(a, b, c).partial_cmp(&T::WIDE_ZERO) {
        Some(Ordering::Greater) => Turn::Left,
        Some(Ordering::Less) => Turn::Right,
        _ => Turn::Colinear,
    }
}

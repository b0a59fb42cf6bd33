//! Coordinate, point and polygon types shared by the hull components.
//!
//! - `Coord`: numeric coordinate with a wide companion type for exact orientation tests.
//! - `Point`: immutable `(x, y)` value, totally ordered by `x` then `y`.
//! - `Polygon`: ccw vertex sequence; lengths 1 and 2 are the degenerate hulls.
//! - `HullError`: the (small) error taxonomy of the core.
//!
//! Code cross-refs: `orient::orientation`, `build::convex_hull`

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use nalgebra::{Point2, Scalar, Vector2};

use super::orient::orientation;

/// Numeric coordinate type.
///
/// `Wide` must hold `(b.x−a.x)*(c.y−a.y) − (b.y−a.y)*(c.x−a.x)` without overflow
/// for the supported input range:
/// - `i32`: full range (wide `i128`).
/// - `i64`: `|c| <= 2^61` (wide `i128`).
/// - `f32`, `f64`: finite values (wide `f64`).
///
/// `in_range` reports whether a value lies in that range; `convex_hull`
/// rejects points for which it is false.
pub trait Coord: Copy + PartialEq + PartialOrd + fmt::Debug {
    type Wide: Copy
        + PartialOrd
        + fmt::Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>;

    const WIDE_ZERO: Self::Wide;

    fn widen(self) -> Self::Wide;

    /// Total order used for sorting; agrees with `==` on finite values.
    fn total_cmp(&self, other: &Self) -> Ordering;

    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn in_range(self) -> bool {
        self.is_finite()
    }

    /// Representative of the equality class (`-0.0` → `0.0` for floats).
    #[inline]
    fn canonical(self) -> Self {
        self
    }
}

macro_rules! impl_int_coord {
    ($($t:ty => $w:ty, $bound:expr);*) => {$(
        impl Coord for $t {
            type Wide = $w;
            const WIDE_ZERO: $w = 0;
            #[inline]
            fn widen(self) -> $w {
                self as $w
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
            #[inline]
            fn in_range(self) -> bool {
                self.unsigned_abs() <= $bound
            }
        }
    )*};
}

macro_rules! impl_float_coord {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Wide = f64;
            const WIDE_ZERO: f64 = 0.0;
            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                <$t>::total_cmp(self, other)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
            #[inline]
            fn canonical(self) -> Self {
                self + 0.0
            }
        }
    )*};
}

impl_int_coord!(i32 => i128, 1 << 31; i64 => i128, 1 << 61);
impl_float_coord!(f32, f64);

/// A point in the plane. No identity beyond its coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Both coordinates inside the exact-orientation range of `T`.
    #[inline]
    pub fn in_range(&self) -> bool {
        self.x.in_range() && self.y.in_range()
    }

    #[inline]
    pub(crate) fn canonical(self) -> Self {
        Self::new(self.x.canonical(), self.y.canonical())
    }

    /// Lexicographic comparison by `x`, then `y`.
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

// Non-finite coordinates never reach the sort (rejected by `convex_hull`), so
// `==` and `cmp_xy` agree on every point the algorithms see.
impl<T: Coord> Eq for Point<T> {}

impl<T: Coord> PartialOrd for Point<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> Ord for Point<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_xy(other)
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Coord> From<Point<T>> for (T, T) {
    #[inline]
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: Coord + Scalar> From<Vector2<T>> for Point<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Coord + Scalar> From<Point<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl<T: Coord + Scalar> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Hull polygon: distinct vertices in counter-clockwise order.
///
/// Invariants (as produced by `convex_hull`):
/// - No repeated vertex.
/// - Length 1 or 2 only for degenerate inputs (single point, colinear set).
/// - For length >= 3, no consecutive triple turns right.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T> {
    pub vertices: Vec<Point<T>>,
}

impl<T> Default for Polygon<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<T: Coord> Polygon<T> {
    #[inline]
    pub fn new(vertices: Vec<Point<T>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point<T>] {
        &self.vertices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.vertices.iter()
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point<T>> {
        self.vertices
    }

    #[inline]
    pub fn contains_vertex(&self, p: Point<T>) -> bool {
        self.vertices.contains(&p)
    }

    /// Twice the signed area (shoelace); positive for ccw order.
    pub fn twice_area(&self) -> T::Wide {
        let n = self.len();
        let mut acc = T::WIDE_ZERO;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            acc = acc + (p.x.widen() * q.y.widen() - q.x.widen() * p.y.widen());
        }
        acc
    }

    /// True if no consecutive vertex triple turns clockwise.
    ///
    /// Colinear triples are accepted; see `is_strictly_convex_ccw` for the strict check.
    pub fn is_convex_ccw(&self) -> bool {
        self.all_turns(|o| o >= T::WIDE_ZERO)
    }

    /// True if every consecutive vertex triple turns counter-clockwise.
    pub fn is_strictly_convex_ccw(&self) -> bool {
        self.all_turns(|o| o > T::WIDE_ZERO)
    }

    // Vacuously true below three vertices.
    fn all_turns(&self, pred: impl Fn(T::Wide) -> bool) -> bool {
        let vs = self.as_slice();
        let n = vs.len();
        n < 3 || (0..n).all(|i| pred(orientation(vs[i], vs[(i + 1) % n], vs[(i + 2) % n])))
    }

    /// Closed containment: inside or on the boundary.
    ///
    /// Pre: `self` is a ccw hull (any length).
    pub fn contains(&self, p: Point<T>) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                orientation(*a, *b, p) == T::WIDE_ZERO && *lo <= p && p <= *hi
            }
            vs => {
                let n = vs.len();
                (0..n).all(|i| orientation(vs[i], vs[(i + 1) % n], p) >= T::WIDE_ZERO)
            }
        }
    }

    /// Same cycle, rotated to start at the minimum vertex in `(x, y)` order.
    pub fn rotated_to_min(&self) -> Polygon<T> {
        let mut vertices = self.vertices.clone();
        if let Some((k, _)) = vertices.iter().enumerate().min_by(|a, b| a.1.cmp(b.1)) {
            vertices.rotate_left(k);
        }
        Polygon { vertices }
    }
}

impl<T: Coord> From<Vec<Point<T>>> for Polygon<T> {
    #[inline]
    fn from(vertices: Vec<Point<T>>) -> Self {
        Self::new(vertices)
    }
}

impl<T: Coord> std::ops::Index<usize> for Polygon<T> {
    type Output = Point<T>;
    #[inline]
    fn index(&self, i: usize) -> &Point<T> {
        &self.vertices[i]
    }
}

impl<'a, T: Coord> IntoIterator for &'a Polygon<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Errors surfaced by the hull core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Extremal query on a polygon without vertices (internal contract violation).
    EmptyPolygon,
    /// Input point `index` has a NaN or infinite coordinate.
    NonFiniteCoordinate { index: usize },
    /// Input point `index` has an integer coordinate outside the supported range.
    CoordinateOutOfRange { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyPolygon => write!(f, "extremal vertex requested from an empty polygon"),
            HullError::NonFiniteCoordinate { index } => {
                write!(f, "input point {} has a non-finite coordinate", index)
            }
            HullError::CoordinateOutOfRange { index } => {
                write!(f, "input point {} has a coordinate outside the exact-arithmetic range", index)
            }
        }
    }
}

impl std::error::Error for HullError {}

use super::types::{Coord, HullError, Point};

/// Index of the vertex with maximum `x`, ties broken by maximum `y`.
pub fn rightmost<T: Coord>(poly: &[Point<T>]) -> Result<usize, HullError> {
    extreme_by(poly, |p, best| p.x > best.x || (p.x == best.x && p.y > best.y))
}

/// Index of the vertex with minimum `x`, ties broken by minimum `y`.
pub fn leftmost<T: Coord>(poly: &[Point<T>]) -> Result<usize, HullError> {
    extreme_by(poly, |p, best| p.x < best.x || (p.x == best.x && p.y < best.y))
}

// First index wins unless a later vertex is strictly better.
#[inline]
fn extreme_by<T: Coord>(
    poly: &[Point<T>],
    better: impl Fn(&Point<T>, &Point<T>) -> bool,
) -> Result<usize, HullError> {
    let (first, rest) = poly.split_first().ok_or(HullError::EmptyPolygon)?;
    let mut best_index = 0;
    let mut best = first;
    for (i, p) in rest.iter().enumerate() {
        if better(p, best) {
            best_index = i + 1;
            best = p;
        }
    }
    Ok(best_index)
}

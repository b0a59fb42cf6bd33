use super::*;
use proptest::prelude::*;

fn pts<T: Coord>(v: &[(T, T)]) -> Vec<Point<T>> {
    v.iter().map(|&p| p.into()).collect()
}

fn same_set<T: Coord>(a: &[Point<T>], b: &[Point<T>]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Andrew's monotone chain with strict turns; starts at the minimum point.
fn reference_hull<T: Coord>(points: &[Point<T>]) -> Vec<Point<T>> {
    let mut sorted = points.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() < 2 {
        return sorted;
    }
    let zero = T::WIDE_ZERO;
    let mut lower: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && orientation(lower[lower.len() - 2], lower[lower.len() - 1], p) <= zero {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point<T>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && orientation(upper[upper.len() - 2], upper[upper.len() - 1], p) <= zero {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[test]
fn empty_input() {
    assert!(convex_hull::<i64>(&[]).unwrap().is_empty());
    assert_eq!(convex_hull_xy::<f64>(&[]).unwrap(), vec![]);
}

#[test]
fn single_and_duplicate_points() {
    assert_eq!(convex_hull_xy(&[(1, 1)]).unwrap(), vec![(1, 1)]);
    assert_eq!(convex_hull_xy(&[(3, 3), (3, 3)]).unwrap(), vec![(3, 3)]);
    assert_eq!(convex_hull_xy(&[(0.5, 0.5), (0.5, 0.5)]).unwrap(), vec![(0.5, 0.5)]);
}

#[test]
fn two_points() {
    assert_eq!(convex_hull_xy(&[(2, 2), (1, 1)]).unwrap(), vec![(1, 1), (2, 2)]);
}

#[test]
fn colinear_collapses_to_extremes() {
    assert_eq!(
        convex_hull_xy(&[(0, 0), (1, 1), (2, 2)]).unwrap(),
        vec![(0, 0), (2, 2)]
    );
    assert_eq!(
        convex_hull_xy(&[(0, 0), (0, 5), (0, 2), (0, 9)]).unwrap(),
        vec![(0, 0), (0, 9)]
    );
    assert_eq!(
        convex_hull_xy(&[(5, 0), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5), (5, 6)]).unwrap(),
        vec![(5, 0), (5, 6)]
    );
}

#[test]
fn square_with_interior_points() {
    let hull = convex_hull_xy(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (0.0, 10.0),
        (5.0, 5.0),
        (3.0, 3.0),
        (7.0, 7.0),
    ])
    .unwrap();
    assert_eq!(
        hull,
        vec![(0.0, 10.0), (0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]
    );
}

#[test]
fn tangent_stress() {
    let input = pts(&[(0.0, 0.0), (2.0, 5.0), (1.0, -3.0), (8.0, 1.0), (10.0, 6.0), (9.0, -2.0)]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull.len(), 5);
    assert!(same_set(
        hull.as_slice(),
        &pts(&[(0.0, 0.0), (1.0, -3.0), (9.0, -2.0), (10.0, 6.0), (2.0, 5.0)])
    ));
    assert!(!hull.contains_vertex(Point::new(8.0, 1.0)));
    assert!(hull.is_strictly_convex_ccw());
}

#[test]
fn nearly_colinear_floats_keep_every_point() {
    let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0000000001), (3.0, 3.0), (4.0, 4.0)]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull.len(), 5);
    assert!(same_set(hull.as_slice(), &input));
}

#[test]
fn large_integer_coordinates() {
    let input = pts(&[
        (12345678900i64, 98765432100i64),
        (12345679900, 98765432100),
        (12345679400, 98765432966),
        (12345678900, 98765432600),
    ]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull.len(), 4);
    assert!(same_set(hull.as_slice(), &input));
    assert!(hull.is_strictly_convex_ccw());
}

#[test]
fn i32_extreme_square() {
    let (lo, hi) = (i32::MIN, i32::MAX);
    let input = pts(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi), (0, 0), (5, -7), (hi - 1, hi - 1)]);
    let hull = convex_hull(&input).unwrap();
    assert_eq!(
        hull.vertices,
        pts(&[(lo, hi), (lo, lo), (hi, lo), (hi, hi)])
    );
}

#[test]
fn equal_x_columns_stay_covered() {
    let input: Vec<Point<i64>> = (0..4)
        .flat_map(|x| (0..4).map(move |y| Point::new(x, y)))
        .collect();
    let hull = convex_hull(&input).unwrap();
    for corner in pts(&[(0, 0), (3, 0), (3, 3), (0, 3)]) {
        assert!(hull.contains_vertex(corner));
    }
    assert!(hull.is_convex_ccw());
    assert!(input.iter().all(|&p| hull.contains(p)));
}

#[test]
fn regular_dodecagon_with_interior() {
    let mut input: Vec<Point<f64>> = (0..12)
        .map(|k| {
            let th = std::f64::consts::TAU * (k as f64) / 12.0;
            Point::new(10.0 * th.cos(), 10.0 * th.sin())
        })
        .collect();
    input.push(Point::new(0.0, 0.0));
    input.push(Point::new(1.0, 2.0));
    let hull = convex_hull(&input).unwrap();
    assert_eq!(hull.len(), 12);
    assert!(hull.twice_area() > 0.0);
}

#[test]
fn reapplying_is_stable_on_examples() {
    let input = pts(&[(0, 0), (10, 0), (10, 10), (0, 10), (5, 5), (3, 3), (7, 7)]);
    let once = convex_hull(&input).unwrap();
    let twice = convex_hull(once.as_slice()).unwrap();
    assert!(same_set(once.as_slice(), twice.as_slice()));
}

fn int_points() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-12i64..=12, -12i64..=12), 0..48)
}

fn float_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..64)
}

proptest! {
    // Small integer grids: many colinear and equal-x points.
    #[test]
    fn hull_is_a_covering_convex_subset(raw in int_points()) {
        let input = pts(&raw);
        let hull = convex_hull(&input).unwrap();

        let mut distinct = hull.vertices.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), hull.len());
        prop_assert!(hull.iter().all(|v| input.contains(v)));
        prop_assert!(hull.is_convex_ccw());
        prop_assert!(hull.twice_area() >= 0);
        prop_assert!(input.iter().all(|&p| hull.contains(p)));
        for v in reference_hull(&input) {
            prop_assert!(hull.contains_vertex(v), "missing extreme vertex {:?}", v);
        }
    }

    #[test]
    fn input_order_does_not_matter(
        (raw, shuffled) in int_points().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = convex_hull(&pts(&raw)).unwrap();
        let b = convex_hull(&pts(&shuffled)).unwrap();
        prop_assert_eq!(a, b);
    }

    // Random floats: general position with overwhelming probability.
    #[test]
    fn general_position_matches_reference(raw in float_points()) {
        let input = pts(&raw);
        let hull = convex_hull(&input).unwrap();
        prop_assert_eq!(hull.rotated_to_min().vertices, reference_hull(&input));
        prop_assert!(hull.is_strictly_convex_ccw());

        let again = convex_hull(hull.as_slice()).unwrap();
        prop_assert_eq!(again.rotated_to_min(), hull.rotated_to_min());
    }
}

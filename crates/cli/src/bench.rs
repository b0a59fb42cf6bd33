//! Timing harness: hull of seeded random integer point sets, one run per size.

use std::time::Instant;

use anyhow::Result;
use dchull::hull::convex_hull;
use dchull::sample::{draw_points, ReplayToken, SampleCfg};
use serde::Serialize;

use crate::points_io::Timing;

/// Sizes timed by default.
pub const DEFAULT_SIZES: [usize; 8] = [100, 500, 1000, 5000, 10000, 50000, 100000, 500000];

#[derive(Clone, Debug, Serialize)]
pub struct BenchParams {
    pub sizes: Vec<usize>,
    pub seed: u64,
    pub min_coord: i64,
    pub max_coord: i64,
}

/// Time `convex_hull` once per size. Draw `k` uses replay token `(seed, k)`;
/// only the hull call is inside the timed region.
pub fn run(params: &BenchParams) -> Result<Vec<Timing>> {
    params
        .sizes
        .iter()
        .enumerate()
        .map(|(k, &n)| {
            let cfg = SampleCfg {
                count: n,
                min_coord: params.min_coord,
                max_coord: params.max_coord,
            };
            let points = draw_points(cfg, ReplayToken::new(params.seed, k as u64));
            let start = Instant::now();
            let hull = convex_hull(&points)?;
            let nanoseconds = start.elapsed().as_nanos();
            tracing::debug!(n, vertices = hull.len(), "timed hull");
            Ok(Timing { n, nanoseconds })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_size_in_order() {
        let params = BenchParams {
            sizes: vec![10, 0, 200],
            seed: 31,
            min_coord: 0,
            max_coord: 50,
        };
        let rows = run(&params).unwrap();
        let ns: Vec<usize> = rows.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![10, 0, 200]);
    }
}

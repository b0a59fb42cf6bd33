//! Seeded point clouds for benchmarks and the CLI timing harness.
//!
//! Purpose
//! - Deterministic inputs for `convex_hull`: the same `(cfg, token)` always
//!   yields the same points, so timings and hulls can be replayed.
//!
//! Model
//! - `draw_points`: uniform integer coordinates in an inclusive square
//!   (many duplicates and colinear runs for small ranges).
//! - `draw_points_disc`: uniform float points in a disc (general position).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// Default seed of the CLI timing harness.
pub const DEFAULT_SEED: u64 = 31;

/// Integer point-cloud configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    pub count: usize,
    /// Inclusive lower bound for both coordinates.
    pub min_coord: i64,
    /// Inclusive upper bound for both coordinates. Swapped with `min_coord` if smaller.
    pub max_coord: i64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            min_coord: 0,
            max_coord: 5000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` integer points uniformly from `[min_coord, max_coord]²`.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point<i64>> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.min_coord.min(cfg.max_coord);
    let hi = cfg.min_coord.max(cfg.max_coord);
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect()
}

/// Draw `count` float points uniformly from the disc of `radius` around the origin.
pub fn draw_points_disc(count: usize, radius: f64, tok: ReplayToken) -> Vec<Point<f64>> {
    let mut rng = tok.to_std_rng();
    let r0 = radius.abs();
    (0..count)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect()
}

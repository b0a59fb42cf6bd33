//! Hull of a seeded random point cloud.
//!
//! Run: cargo run -p dchull --example random_hull -- [count] [seed]

use dchull::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(1000);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(dchull::sample::DEFAULT_SEED);

    let cfg = SampleCfg {
        count,
        ..SampleCfg::default()
    };
    let points = draw_points(cfg, ReplayToken::new(seed, 0));
    let hull = match convex_hull(&points) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("hull failed: {e}");
            std::process::exit(1);
        }
    };
    println!("{} points -> {} hull vertices (ccw)", points.len(), hull.len());
    for p in &hull {
        println!("{}, {}", p.x, p.y);
    }
    println!("twice area: {}", hull.twice_area());
}

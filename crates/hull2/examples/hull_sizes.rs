//! Print hull sizes per distribution for a quick sanity check on counts.
//!
//! Usage:
//!   cargo run -p hull2 --example hull_sizes -- 5000
//!
//! `circle-fixed` should report every point on the hull; the other
//! distributions only a small fraction.

use hull2::cloud::{generate, CloudCfg, Distribution};
use hull2::{GiftWrap, GrahamScan, HullSolver};

fn main() {
    let count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5_000usize);
    for dist in Distribution::ALL {
        let cfg = CloudCfg {
            count,
            distribution: dist,
            ..CloudCfg::default()
        };
        let pts = match generate(&cfg, 2025) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{dist}: {e}");
                continue;
            }
        };
        let gw = GiftWrap::default().solve(&pts);
        let gs = GrahamScan::default().solve(&pts);
        println!(
            "{dist:>12}: n={count} gift-wrap={} graham={} agree={}",
            gw.vertex_count(),
            gs.vertex_count(),
            gw.vertex_count() == gs.vertex_count()
        );
    }
}

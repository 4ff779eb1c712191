//! Convex hull solvers: gift wrapping and Graham scan.
//!
//! Purpose
//! - Two independent constructions of the same hull, one O(n·h) and one
//!   O(n log n), driven by the same `is_left_of_eps` predicate so their outputs
//!   can be cross-checked.
//!
//! Two passes
//! - Walk: each solver finds the extreme vertex cycle with the predicate at zero
//!   tolerance. At zero tolerance "better candidate" is a strict order on the
//!   points a walk compares, so the running best cannot be pulled backwards
//!   along a thin run of almost-collinear points.
//! - Flatten: `flatten` replays the chain rule with `HullCfg::eps` over that
//!   cycle and drops vertices that turn by at most `eps`. Both solvers hand it
//!   the same cycle from the same anchor, so they return the same hull.
//!
//! Conventions
//! - Edges refer to input points by `PointId`; the caller's slice is never
//!   reordered. Each solver sorts or filters a private id vector.
//! - Fewer than two distinct points → empty hull. All points collinear → the
//!   two-edge loop between the extreme points. Both solvers follow this.
//! - Winding is clockwise in a y-up frame (interior on the right of each edge).
//!
//! Code cross-refs: `predicates::is_left_of_eps`, `sort::quicksort_by`, `Hull`

use std::cmp::Ordering;
use std::fmt;
use std::iter;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::predicates::{cmp_xy, is_left_of_eps, on_segment, orientation, Turn};
use crate::sort::quicksort_by;
use crate::types::{Edge, Hull, HullCfg, Point2, PointId};

/// Common interface of the hull constructions.
pub trait HullSolver {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Build the hull of `points`. Never fails; degenerate inputs give
    /// degenerate hulls.
    fn solve<'a>(&self, points: &'a [Point2]) -> Hull<'a>;
}

/// Jarvis march.
#[derive(Clone, Copy, Debug, Default)]
pub struct GiftWrap {
    pub cfg: HullCfg,
}

impl GiftWrap {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg }
    }
}

impl HullSolver for GiftWrap {
    fn name(&self) -> &'static str {
        "gift-wrap"
    }

    fn solve<'a>(&self, points: &'a [Point2]) -> Hull<'a> {
        let Some(anchor) = lowest_xy(points) else {
            return Hull::empty(points, self.cfg);
        };
        let at = |id: PointId| &points[id.0];
        let mut pool: Vec<PointId> = (0..points.len())
            .map(PointId)
            .filter(|&id| id != anchor && !at(id).coincides(at(anchor)))
            .collect();
        if pool.is_empty() {
            return Hull::empty(points, self.cfg);
        }

        let mut cycle = vec![anchor];
        let mut current = anchor;
        loop {
            // The anchor only competes once we have left it; listing it first
            // makes it win ties against duplicates when closing the loop.
            let closing = (current != anchor).then_some(anchor);
            let mut candidates = closing
                .into_iter()
                .map(|id| (None, id))
                .chain(pool.iter().enumerate().map(|(k, &id)| (Some(k), id)));
            let Some(mut target) = candidates.next() else {
                break;
            };
            for cand in candidates {
                if beats(points, current, target.1, cand.1) {
                    target = cand;
                }
            }

            match target.0 {
                None => break,
                Some(slot) => {
                    pool.swap_remove(slot);
                    current = target.1;
                    cycle.push(current);
                }
            }
        }
        Hull::new(points, flatten(points, &cycle, self.cfg.eps), self.cfg)
    }
}

/// `cand` is a better next vertex than `target` when walking from `current`.
///
/// Zero-tolerance predicate; coincident candidates fall back to the lower id
/// so the walk picks the same representative as the sort-and-dedup in Graham.
#[inline]
fn beats(points: &[Point2], current: PointId, target: PointId, cand: PointId) -> bool {
    let (c, t, q) = (&points[current.0], &points[target.0], &points[cand.0]);
    is_left_of_eps(c, t, q, 0.0) || (q.coincides(t) && cand < target)
}

/// Monotone-chain Graham scan over a randomized-quicksort ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrahamScan {
    pub cfg: HullCfg,
    /// Pivot RNG seed; `None` draws pivots from the thread-local RNG.
    pub seed: Option<u64>,
}

impl GrahamScan {
    pub fn new(cfg: HullCfg) -> Self {
        Self { cfg, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn sorted_ids(&self, points: &[Point2]) -> Vec<PointId> {
        let mut ids: Vec<PointId> = (0..points.len()).map(PointId).collect();
        let cmp = |a: &PointId, b: &PointId| {
            cmp_xy(&points[a.0], &points[b.0]).then_with(|| a.cmp(b))
        };
        match self.seed {
            Some(seed) => quicksort_by(&mut ids, &mut StdRng::seed_from_u64(seed), cmp),
            None => quicksort_by(&mut ids, &mut rand::thread_rng(), cmp),
        }
        ids.dedup_by(|b, a| points[a.0].coincides(&points[b.0]));
        ids
    }
}

/// One chain at zero tolerance; `ids` must already be in sweep order.
fn chain<'p, I>(points: &[Point2], ids: I) -> Vec<PointId>
where
    I: Iterator<Item = &'p PointId>,
{
    let at = |id: PointId| &points[id.0];
    let mut boundary: Vec<PointId> = Vec::new();
    for &next in ids {
        while boundary.len() >= 2 {
            let last = boundary[boundary.len() - 1];
            let second_last = boundary[boundary.len() - 2];
            // Keep `last` only if it still makes a convex turn towards `next`.
            if is_left_of_eps(at(second_last), at(next), at(last), 0.0) {
                break;
            }
            boundary.pop();
        }
        boundary.push(next);
    }
    boundary
}

impl HullSolver for GrahamScan {
    fn name(&self) -> &'static str {
        "graham"
    }

    fn solve<'a>(&self, points: &'a [Point2]) -> Hull<'a> {
        let ids = self.sorted_ids(points);
        if ids.len() < 2 {
            return Hull::empty(points, self.cfg);
        }
        let upper = chain(points, ids.iter());
        let lower = chain(points, ids.iter().rev());
        // Both chains share their endpoints; the lower one contributes only its interior.
        let cycle: Vec<PointId> = upper
            .iter()
            .chain(&lower[1..lower.len() - 1])
            .copied()
            .collect();
        Hull::new(points, flatten(points, &cycle, self.cfg.eps), self.cfg)
    }
}

/// Close a clockwise vertex cycle that starts at the anchor, dropping vertices
/// that turn by at most `eps`.
///
/// This is the chain rule again, now at tolerance `eps`, run once around the
/// cycle with the anchor pinned. A vertex is only dropped if every vertex
/// already dropped into the same gap stays within `eps` of the shortcut edge.
/// If the result collapses to a two-edge loop that does not cover the dropped
/// vertices, the zero-tolerance cycle is kept as is.
fn flatten(points: &[Point2], cycle: &[PointId], eps: f64) -> Vec<Edge> {
    let at = |id: PointId| &points[id.0];
    let Some(&anchor) = cycle.first() else {
        return Vec::new();
    };

    // Each kept vertex with the vertices dropped between it and its predecessor.
    let mut kept: Vec<(PointId, Vec<PointId>)> = Vec::with_capacity(cycle.len() + 1);
    for &next in cycle.iter().chain(iter::once(&anchor)) {
        let mut gap: Vec<PointId> = Vec::new();
        while kept.len() >= 2 {
            let u = kept[kept.len() - 2].0;
            let (last, behind) = &kept[kept.len() - 1];
            if u == next || is_left_of_eps(at(u), at(next), at(*last), eps) {
                break;
            }
            let spills = behind
                .iter()
                .chain(&gap)
                .any(|&r| orientation(at(u), at(next), at(r), eps) == Turn::Left);
            if spills {
                break;
            }
            if let Some((id, dropped)) = kept.pop() {
                gap.extend(dropped);
                gap.push(id);
            }
        }
        kept.push((next, gap));
    }

    if kept.len() == 3 {
        let (a, b) = (at(kept[0].0), at(kept[1].0));
        let covered = kept
            .iter()
            .flat_map(|(_, dropped)| dropped)
            .all(|&r| on_segment(a, b, at(r), eps));
        if !covered {
            return loop_edges(cycle.iter().copied().chain(iter::once(anchor)));
        }
    }
    loop_edges(kept.iter().map(|(id, _)| *id))
}

fn loop_edges(ids: impl IntoIterator<Item = PointId>) -> Vec<Edge> {
    let ids: Vec<PointId> = ids.into_iter().collect();
    ids.windows(2).map(|w| Edge::new(w[0], w[1])).collect()
}

/// First point that is minimal under `cmp_xy`.
fn lowest_xy(points: &[Point2]) -> Option<PointId> {
    points
        .iter()
        .enumerate()
        .reduce(|best, cur| {
            if cmp_xy(cur.1, best.1) == Ordering::Less {
                cur
            } else {
                best
            }
        })
        .map(|(k, _)| PointId(k))
}

/// Solver selector for CLIs and benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    GiftWrap,
    GrahamScan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GiftWrap, Algorithm::GrahamScan];

    pub fn solver(self, cfg: HullCfg) -> Box<dyn HullSolver + Send + Sync> {
        match self {
            Algorithm::GiftWrap => Box::new(GiftWrap::new(cfg)),
            Algorithm::GrahamScan => Box::new(GrahamScan::new(cfg)),
        }
    }

    /// Same as [`Algorithm::solver`] but with reproducible pivots where applicable.
    pub fn seeded_solver<R: Rng>(
        self,
        cfg: HullCfg,
        rng: &mut R,
    ) -> Box<dyn HullSolver + Send + Sync> {
        match self {
            Algorithm::GiftWrap => Box::new(GiftWrap::new(cfg)),
            Algorithm::GrahamScan => Box::new(GrahamScan::new(cfg).with_seed(rng.gen())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::GiftWrap => "gift-wrap",
            Algorithm::GrahamScan => "graham",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised algorithm names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm `{}` (expected gift-wrap or graham)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gift-wrap" | "giftwrap" | "jarvis" => Ok(Algorithm::GiftWrap),
            "graham" | "graham-scan" | "monotone-chain" => Ok(Algorithm::GrahamScan),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Convex hull with default tolerance (Graham scan).
pub fn convex_hull(points: &[Point2]) -> Hull<'_> {
    GrahamScan::default().solve(points)
}

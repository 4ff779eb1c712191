//! Points, edges, and hulls.
//!
//! - `Point2`: immutable planar point with a cached integer projection.
//! - `PointId`: identity key of a point (its index in the caller's slice).
//! - `Edge`: directed hull segment between two ids.
//! - `Hull`: edges produced by one solver run, borrowing the input points.
//! - `HullCfg`: tolerance shared by every predicate call within a solve.
//!
//! Code cross-refs: `predicates::{is_left_of_eps, orientation}`, `solvers`

use nalgebra::Vector2;

use crate::predicates::{on_segment, orientation, Turn, EPS};

/// Hull configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Absolute slack on the cross product and squared distances.
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}

/// Planar point. Coordinates are fixed at construction.
///
/// The integer projection truncates toward zero (saturating) and exists for
/// rasterizing only; every geometric decision uses the real coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2 {
    pos: Vector2<f64>,
    pixel: (i32, i32),
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            pixel: (x as i32, y as i32),
        }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }
    #[inline]
    pub fn pixel(&self) -> (i32, i32) {
        self.pixel
    }
    /// Squared Euclidean distance.
    #[inline]
    pub fn dist2(&self, other: &Point2) -> f64 {
        (other.pos - self.pos).norm_squared()
    }
    /// Exact coordinate equality (no tolerance).
    #[inline]
    pub fn coincides(&self, other: &Point2) -> bool {
        self.pos == other.pos
    }
}

impl From<Vector2<f64>> for Point2 {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Index of a point in the slice handed to a solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Directed boundary segment `from → to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: PointId,
    pub to: PointId,
}

impl Edge {
    #[inline]
    pub fn new(from: PointId, to: PointId) -> Self {
        Self { from, to }
    }
}

/// Convex hull of a point slice as a closed edge loop.
///
/// Invariants (for hulls built by the solvers in this crate):
/// - Empty when the input has fewer than two distinct points.
/// - Two edges `p → q`, `q → p` when all points are collinear.
/// - Otherwise a simple closed polygon, wound clockwise in a y-up frame,
///   whose vertices are extreme input points turning by more than `eps`.
#[derive(Clone, Debug)]
pub struct Hull<'a> {
    points: &'a [Point2],
    edges: Vec<Edge>,
    cfg: HullCfg,
}

impl<'a> Hull<'a> {
    pub(crate) fn new(points: &'a [Point2], edges: Vec<Edge>, cfg: HullCfg) -> Self {
        Self { points, edges, cfg }
    }

    pub fn empty(points: &'a [Point2], cfg: HullCfg) -> Self {
        Self::new(points, Vec::new(), cfg)
    }

    /// Input points the hull refers into.
    pub fn points(&self) -> &'a [Point2] {
        self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn point(&self, id: PointId) -> &'a Point2 {
        &self.points[id.0]
    }

    /// Hull vertex ids in winding order (each edge contributes its start).
    pub fn vertex_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.edges.iter().map(|e| e.from)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &'a Point2> + '_ {
        let points = self.points;
        self.vertex_ids().map(move |id| &points[id.0])
    }

    /// Number of distinct hull vertices.
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge endpoints, for rendering.
    pub fn segments(&self) -> impl Iterator<Item = (&'a Point2, &'a Point2)> + '_ {
        let points = self.points;
        self.edges
            .iter()
            .map(move |e| (&points[e.from.0], &points[e.to.0]))
    }

    /// Every edge ends where the next one starts, wrapping around.
    pub fn is_closed(&self) -> bool {
        let n = self.edges.len();
        (0..n).all(|k| self.edges[k].to == self.edges[(k + 1) % n].from)
    }

    /// No consecutive vertex triple turns left (against the clockwise winding).
    pub fn is_convex(&self) -> bool {
        let n = self.edges.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| {
            let a = self.point(self.edges[k].from);
            let b = self.point(self.edges[k].to);
            let c = self.point(self.edges[(k + 1) % n].to);
            orientation(a, b, c, self.cfg.eps) != Turn::Left
        })
    }

    /// Point-in-convex-polygon test; the boundary counts as inside.
    ///
    /// For the degenerate two-edge hull this reduces to "on the segment".
    pub fn contains(&self, q: &Point2) -> bool {
        match self.edges.len() {
            0 => false,
            2 => on_segment(
                self.point(self.edges[0].from),
                self.point(self.edges[0].to),
                q,
                self.cfg.eps,
            ),
            _ => self
                .segments()
                .all(|(a, b)| orientation(a, b, q, self.cfg.eps) != Turn::Left),
        }
    }
}

//! Planar convex hulls: gift wrapping and Graham scan.
//!
//! Both solvers read the same point slice, share the orientation predicate in
//! [`predicates`], and return a [`Hull`] of directed edges that refers back into
//! that slice by [`PointId`]. Graham scan orders its input with the randomized
//! quicksort in [`sort`]. [`cloud`] draws the random inputs used by benches and
//! the CLI harness.
//!
//! API Policy
//! - The crate is workspace-internal; breaking changes are fine when they make
//!   the kernel clearer.

pub mod cloud;
pub mod predicates;
pub mod solvers;
pub mod sort;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use predicates::{cmp_xy, is_left_of, is_left_of_eps, on_segment, orientation, Turn, EPS};
pub use solvers::{convex_hull, Algorithm, GiftWrap, GrahamScan, HullSolver, UnknownAlgorithm};
pub use sort::{quicksort, quicksort_by, quicksort_with};
pub use types::{Edge, Hull, HullCfg, Point2, PointId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{generate, Bounds, CloudCfg, Distribution, GeneratorError};
    pub use crate::{
        convex_hull, Algorithm, Edge, GiftWrap, GrahamScan, Hull, HullCfg, HullSolver, Point2,
        PointId,
    };
}

//! Random planar point clouds.
//!
//! Purpose
//! - Reproducible inputs for the solvers, benches and the CLI harness.
//!
//! Model
//! - `Uniform`: both coordinates uniform in the bounds.
//! - `Normal`: per-axis normal centred in the bounds with σ = (min+max)/7,
//!   clamped into the bounds.
//! - `Circle`: uniform angle, uniform distance in `[0, r)` from `(r, r)` with
//!   `r = min(max_x, max_y)/2`. Dense centre, sparse rim.
//! - `CircleFixed`: as `Circle` with distance exactly `r`; every point is a
//!   hull vertex, which is the gift-wrap worst case.
//! - Same `(cfg, seed)` always yields the same cloud.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Normal};

use crate::types::Point2;

/// Error type for cloud generation.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid cloud params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Spatial distribution of generated points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    Normal,
    Circle,
    CircleFixed,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Uniform,
        Distribution::Normal,
        Distribution::Circle,
        Distribution::CircleFixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Normal => "normal",
            Distribution::Circle => "circle",
            Distribution::CircleFixed => "circle-fixed",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "uniform" => Ok(Distribution::Uniform),
            "normal" => Ok(Distribution::Normal),
            "circle" => Ok(Distribution::Circle),
            "circle-fixed" => Ok(Distribution::CircleFixed),
            _ => Err(GeneratorError::invalid(format!(
                "unknown distribution `{s}` (expected uniform, normal, circle, circle-fixed)"
            ))),
        }
    }
}

/// Axis-aligned sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1000.0,
            min_y: 0.0,
            max_y: 1000.0,
        }
    }
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    pub fn contains(&self, p: &Point2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x()) && (self.min_y..=self.max_y).contains(&p.y())
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        let all = [self.min_x, self.max_x, self.min_y, self.max_y];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(GeneratorError::invalid("bounds must be finite"));
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(GeneratorError::invalid("bounds must satisfy min <= max"));
        }
        Ok(())
    }
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub distribution: Distribution,
    pub bounds: Bounds,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 5_000,
            distribution: Distribution::Circle,
            bounds: Bounds::default(),
        }
    }
}

/// Draw `cfg.count` points with an RNG seeded from `seed`.
pub fn generate(cfg: &CloudCfg, seed: u64) -> Result<Vec<Point2>, GeneratorError> {
    generate_with(cfg, &mut StdRng::seed_from_u64(seed))
}

/// Draw `cfg.count` points from a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(
    cfg: &CloudCfg,
    rng: &mut R,
) -> Result<Vec<Point2>, GeneratorError> {
    let b = cfg.bounds;
    b.validate()?;
    let points = match cfg.distribution {
        Distribution::Uniform => (0..cfg.count)
            .map(|_| Point2::new(uniform(rng, b.min_x, b.max_x), uniform(rng, b.min_y, b.max_y)))
            .collect(),
        Distribution::Normal => {
            let nx = normal_axis(b.min_x, b.max_x)?;
            let ny = normal_axis(b.min_y, b.max_y)?;
            (0..cfg.count)
                .map(|_| {
                    let x = nx.sample(rng).clamp(b.min_x, b.max_x);
                    let y = ny.sample(rng).clamp(b.min_y, b.max_y);
                    Point2::new(x, y)
                })
                .collect()
        }
        Distribution::Circle | Distribution::CircleFixed => {
            let radius = b.max_x.min(b.max_y) / 2.0;
            let fixed = cfg.distribution == Distribution::CircleFixed;
            (0..cfg.count)
                .map(|_| {
                    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
                    let dist = if fixed {
                        radius
                    } else {
                        rng.gen::<f64>() * radius
                    };
                    Point2::new(radius + dist * angle.cos(), radius + dist * angle.sin())
                })
                .collect()
        }
    };
    Ok(points)
}

#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

fn normal_axis(min: f64, max: f64) -> Result<Normal<f64>, GeneratorError> {
    // σ keeps ~3.5σ inside the default [0, 1000] window; clamping handles the tails.
    let sigma = ((min + max) / 7.0).abs();
    Normal::new((min + max) / 2.0, sigma)
        .map_err(|e| GeneratorError::invalid(format!("normal axis: {e}")))
}
